//! Top-level advice derived from the scan results

use shared_types::{DocumentSummary, Issue, IssueKind, ReadabilityScore};

/// Build the "top suggestions" list shown above the detailed issues.
/// Each line aggregates one class of finding; a document that triggers
/// nothing gets a single all-clear line.
pub fn build(
    summary: &DocumentSummary,
    readability: Option<&ReadabilityScore>,
    issues: &[Issue],
) -> Vec<String> {
    let count = |kind: IssueKind| issues.iter().filter(|i| i.kind == kind).count();
    let mut out = Vec::new();

    if let Some(score) = readability {
        if score.flesch_reading_ease < 60.0 {
            out.push(
                "Improve readability: use shorter sentences and simpler words (Flesch score below 60)."
                    .to_string(),
            );
        }
    }

    if summary.avg_words_per_sentence > 20.0 {
        out.push(
            "Shorten sentences: aim for roughly 14-20 words per sentence on average.".to_string(),
        );
    }

    let long = count(IssueKind::LongSentence);
    if long >= 3 {
        out.push(format!(
            "Break up long sentences: found {long} sentences over 25 words."
        ));
    }

    let passive = count(IssueKind::PassiveVoice);
    if passive >= 3 {
        out.push(format!(
            "Reduce passive voice: found {passive} likely cases."
        ));
    }

    let adverbs = count(IssueKind::AdverbHeavy);
    if adverbs >= 3 {
        out.push(format!(
            "Trim adverbs: {adverbs} sentences lean on \"-ly\" words."
        ));
    }

    let spelling = count(IssueKind::Spelling);
    if spelling >= 5 {
        out.push(format!(
            "Fix spelling: at least {spelling} possible misspellings."
        ));
    }

    let bullets = count(IssueKind::LongBullet);
    if bullets >= 1 {
        out.push(format!(
            "Tighten bullet points: {bullets} bullets exceed 20 words."
        ));
    }

    if out.is_empty() {
        out.push("Looks good! No major issues detected by the basic checks.".to_string());
    }

    out
}
