//! Plain-text rendering for the terminal.

use gigmarket_client::screens::profile::ProfileEditor;
use gigmarket_client::screens::wallet::{money, TransactionRow};
use gigmarket_client::MessageView;
use gigmarket_shared::models::{Job, Proposal};

pub fn job_line(job: &Job, proposals: Option<usize>) -> String {
    let count = proposals.map_or_else(|| "?".to_string(), |n| n.to_string());
    format!(
        "#{:<5} {:<40} {:>10}  {:<9} proposals: {}",
        job.id.as_str(),
        truncate(&job.title, 40),
        money(job.budget),
        job.status.as_str(),
        count,
    )
}

pub fn job_details(job: &Job) {
    println!("{} (#{})", job.title, job.id);
    println!("  status:     {}", job.status.as_str());
    println!("  budget:     {}", money(job.budget));
    if let Some(location) = &job.location {
        println!("  location:   {location}");
    }
    if let Some(level) = &job.experience_level {
        println!("  experience: {level}");
    }
    if let Some(kind) = &job.job_type {
        println!("  type:       {kind}");
    }
    let skills = job.skills();
    if !skills.is_empty() {
        println!("  skills:     {}", skills.join(", "));
    }
    if !job.description.is_empty() {
        println!();
        println!("{}", job.description);
    }
}

pub fn proposal_line(proposal: &Proposal) -> String {
    let who = proposal
        .freelancer_email
        .clone()
        .unwrap_or_else(|| format!("freelancer {}", proposal.freelancer_id));
    format!(
        "#{:<5} {:<30} {:>10}  {}",
        proposal.id.as_str(),
        truncate(&who, 30),
        money(proposal.bid),
        proposal.timeline.as_deref().unwrap_or("-"),
    )
}

pub fn transaction_line(row: &TransactionRow) -> String {
    let job = row
        .job_id
        .as_ref()
        .map(|id| format!("  job #{id}"))
        .unwrap_or_default();
    format!(
        "{:<13} {:<20} {}{}{}",
        row.date_label(),
        row.label,
        row.sign,
        row.quantity,
        job
    )
}

pub fn message_line(message: &MessageView) -> String {
    let time = message
        .sent_at
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string());
    let who = if message.mine { "me" } else { "them" };
    format!("[{time}] {who:>4} › {}", message.content)
}

pub fn profile(editor: &ProfileEditor) {
    let Some(profile) = editor.profile() else {
        println!("No profile.");
        return;
    };
    let title: &str = if profile.title.is_empty() { "(no title)" } else { &profile.title };
    println!("{title}  <{}>", profile.email);
    if let Some(rate) = profile.hourly_rate {
        println!("  rate:   {}/hr", money(rate));
    }
    if !profile.skills.is_empty() {
        println!("  skills: {}", profile.skills.join(", "));
    }
    if !profile.bio.is_empty() {
        println!();
        println!("{}", profile.bio);
    }

    if !editor.portfolio().is_empty() {
        println!();
        println!("Portfolio");
        for item in editor.portfolio() {
            let link = item.media_links().into_iter().next().unwrap_or_default();
            println!("  #{:<5} {}  {link}", item.id.as_str(), item.project_title);
        }
    }
    if !editor.products().is_empty() {
        println!();
        println!("Digital products");
        for product in editor.products() {
            let price = product.price.map(money).unwrap_or_default();
            println!("  #{:<5} {}  {price}", product.id.as_str(), product.product_name);
        }
    }
    if !editor.work_history().is_empty() {
        println!();
        println!("Work history");
        for entry in editor.work_history() {
            let start = entry.start_date.as_deref().unwrap_or("?");
            let end = if entry.is_current.unwrap_or(false) {
                "present"
            } else {
                entry.end_date.as_deref().unwrap_or("?")
            };
            println!(
                "  #{:<5} {} at {}  {start} - {end}",
                entry.id.as_str(),
                entry.position,
                entry.company_name
            );
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use gigmarket_shared::types::MessageId;

    #[test]
    fn test_truncate_keeps_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_message_line_marks_sender() {
        let view = MessageView {
            id: MessageId::from(1),
            content: "hello".into(),
            mine: true,
            sent_at: None,
        };
        assert_eq!(message_line(&view), "[--:--]   me › hello");
    }
}
