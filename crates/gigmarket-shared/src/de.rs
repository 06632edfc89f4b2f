//! Lenient deserializers for amounts.  Postgres `numeric` columns reach the
//! client as decimal strings while computed values arrive as JSON numbers.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

fn to_f64<E: serde::de::Error>(raw: RawAmount) -> Result<f64, E> {
    match raw {
        RawAmount::Number(n) => Ok(n),
        RawAmount::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid amount: {s:?}"))),
    }
}

pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    to_f64(RawAmount::deserialize(deserializer)?)
}

pub fn opt_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<RawAmount>::deserialize(deserializer)? {
        Some(raw) => to_f64(raw).map(Some),
        None => Ok(None),
    }
}

/// Skills are stored either as a JSON array or as a comma-separated string.
pub fn skills<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSkills {
        List(Vec<String>),
        Text(String),
        Nothing(()),
    }

    Ok(match RawSkills::deserialize(deserializer)? {
        RawSkills::List(list) => list,
        RawSkills::Text(s) => crate::models::split_skills(&s),
        RawSkills::Nothing(()) => Vec::new(),
    })
}
