//! Plaintext rendering of a result record for the practitioner email.

use std::fmt::Write;

use crate::domain::catalog::SkillDomain;
use crate::domain::scoring::ResultRecord;

/// Subject line for the notification email.
pub fn summary_subject(record: &ResultRecord) -> String {
    format!("New questionnaire result {}", record.code)
}

/// Human-readable plaintext summary of a finished result.
pub fn render_summary(record: &ResultRecord) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "A new social skills questionnaire was submitted.");
    let _ = writeln!(body);
    let _ = writeln!(body, "Retrieval code: {}", record.code);
    let _ = writeln!(body, "Submitted at:   {}", record.timestamp.to_rfc3339());
    if let Some(age_group) = &record.age_group {
        let _ = writeln!(body, "Age group:      {age_group}");
    }
    let _ = writeln!(body);
    for domain in SkillDomain::ALL {
        let score = record.domain_scores.get(&domain).copied().unwrap_or(0);
        let max = record.domain_max.get(&domain).copied().unwrap_or(0);
        let _ = writeln!(body, "{:<24} {:>3} / {}", domain.label(), score, max);
    }
    let _ = writeln!(body);
    let _ = writeln!(
        body,
        "Total score:    {} / {}",
        record.total_score, record.total_max
    );
    let _ = writeln!(
        body,
        "Estimated theory-of-mind level: {} (0-5)",
        record.tom_level
    );
    let _ = writeln!(body);
    let _ = writeln!(
        body,
        "Look up the full record with the retrieval code above."
    );
    body
}
