//! Deduction detector — scans the letter for negative-signal phrases across
//! three severity tiers and returns a penalty (always ≤ 0).
//!
//! Tier 1 (disqualifying language) is an absolute −80 override. Tiers 2 and 3
//! are softer signals whose combined penalty is floored at −50.

use once_cell::sync::Lazy;
use regex::Regex;

static TIER1_SEVERE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"unsafe|cannot recommend|unethical|serious professionalism issue")
        .expect("tier-1 pattern is valid")
});

static TIER2_WEAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"needed constant supervision|unreliable|recommend with reservations|frequent absences")
        .expect("tier-2 pattern is valid")
});

static TIER3_FAINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"showed improvement|performed at expected level|quiet in discussions|minor issue")
        .expect("tier-3 pattern is valid")
});

/// Returns the total deduction for `text`: 0, −20, −40, −50, or −80.
///
/// Tier-2 and tier-3 counts are presence flags (0 or 1): each group is
/// checked as a single combined pattern, not per phrase. The ≥2 and ≥3 arms
/// below encode the thresholds that apply if these ever become true
/// occurrence counts, and must stay as written.
pub fn detect_deductions(text: &str) -> i32 {
    let text = text.to_lowercase();

    if TIER1_SEVERE.is_match(&text) {
        return -80;
    }

    let tier2 = u32::from(TIER2_WEAK.is_match(&text));
    let tier3 = u32::from(TIER3_FAINT.is_match(&text));

    let mut deduction = 0;
    if tier2 >= 2 {
        deduction = -60;
    } else if tier2 == 1 {
        deduction = -40;
    }

    if tier3 >= 3 {
        // Flat replacement, not additive.
        deduction = -50;
    } else if tier3 > 0 {
        deduction += -20;
    }

    // Floor on the combined soft deduction. The −80 override above is exempt.
    if tier2 > 0 && tier3 > 0 && deduction < -50 {
        deduction = -50;
    }

    deduction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_letter_has_no_deduction() {
        assert_eq!(detect_deductions(""), 0);
        assert_eq!(detect_deductions("an outstanding clinician, highly recommended"), 0);
    }

    #[test]
    fn test_tier3_alone_is_minus_20() {
        assert_eq!(detect_deductions("there was one minor issue early on"), -20);
        assert_eq!(detect_deductions("she showed improvement over the year"), -20);
    }

    #[test]
    fn test_tier2_alone_is_minus_40() {
        assert_eq!(detect_deductions("he was unreliable with documentation"), -40);
        assert_eq!(detect_deductions("I recommend with reservations"), -40);
    }

    #[test]
    fn test_tier2_plus_tier3_clamps_to_minus_50() {
        // −40 + −20 = −60, floored at −50.
        let text = "unreliable at times, and there was a minor issue with charting";
        assert_eq!(detect_deductions(text), -50);
    }

    #[test]
    fn test_severe_phrase_is_minus_80() {
        assert_eq!(detect_deductions("I cannot recommend this applicant"), -80);
        assert_eq!(detect_deductions("his conduct was unethical"), -80);
        assert_eq!(detect_deductions("unsafe handoffs were observed"), -80);
    }

    #[test]
    fn test_severe_overrides_all_other_tiers() {
        let text = "unethical, unreliable, frequent absences, and a minor issue besides";
        assert_eq!(detect_deductions(text), -80);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect_deductions("UNSAFE"), -80);
        assert_eq!(detect_deductions("Quiet In Discussions"), -20);
    }

    #[test]
    fn test_repeated_phrases_still_count_once() {
        // Presence flags: three tier-3 phrases do not reach the ≥3 branch.
        let text = "showed improvement, quiet in discussions, and a minor issue";
        assert_eq!(detect_deductions(text), -20);
    }
}
