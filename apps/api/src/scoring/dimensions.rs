//! Dimension classifiers — six independent tier cascades over the letter text.
//!
//! Each classifier walks an ordered table of (trigger pattern, tier score)
//! pairs, highest tier first, and returns the score of the first tier whose
//! phrases appear anywhere in the lower-cased text. No tier matched → the
//! dimension's baseline score. The classifiers share no state and may run in
//! any order.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered first-match-wins cascade with a baseline fallback.
struct TierTable {
    tiers: Vec<(Regex, i32)>,
    baseline: i32,
}

impl TierTable {
    fn classify(&self, text: &str) -> i32 {
        let text = text.to_lowercase();
        self.tiers
            .iter()
            .find(|(trigger, _)| trigger.is_match(&text))
            .map(|&(_, score)| score)
            .unwrap_or(self.baseline)
    }
}

fn trigger(alternation: &str) -> Regex {
    Regex::new(alternation).expect("tier trigger pattern is valid")
}

static PATIENT_CARE: Lazy<TierTable> = Lazy::new(|| TierTable {
    tiers: vec![
        (trigger(r"exceptional care|remarkable bedside|trusted by patients|compassion|outstanding clinician|stellar performance|technical skills surpassed|medical judgment consistently sound|top [0-9]+%|strongest intern"), 95),
        (trigger(r"good care|solid clinical skills|performed well|reliable clinician|strong clinical ability"), 75),
        (trigger(r"adequate clinical|meets expectations|satisfactory performance|no major issues"), 50),
    ],
    baseline: 30,
});

static MEDICAL_KNOWLEDGE: Lazy<TierTable> = Lazy::new(|| TierTable {
    tiers: vec![
        (trigger(r"extraordinary|exceptional|brilliant|outstanding|top \d+%|fund of knowledge"), 100),
        (trigger(r"strong|solid|very good|good knowledge"), 75),
        (trigger(r"adequate|meets expectations"), 50),
    ],
    baseline: 30,
});

static INTERPERSONAL: Lazy<TierTable> = Lazy::new(|| TierTable {
    tiers: vec![
        (trigger(r"exceptional communicator|natural leader|works extremely well with team|universally respected"), 90),
        (trigger(r"gets along|quiet but effective|team player"), 60),
        (trigger(r"neutral mention only|no mention teamwork"), 35),
    ],
    baseline: 30,
});

static PROFESSIONALISM: Lazy<TierTable> = Lazy::new(|| TierTable {
    tiers: vec![
        (trigger(r"unfailingly dependable|tireless|resilient|always prepared|never compromising|highest praise|remarkable dedication|exceptional work ethic|adaptability|consistently reliable|outstanding professionalism"), 95),
        (trigger(r"hard worker|diligent|professional|meets expectations|dependable|punctual|well prepared|trustworthy"), 75),
        (trigger(r"adequate|neutral mention|satisfactory"), 50),
    ],
    baseline: 30,
});

static SCHOLARLY: Lazy<TierTable> = Lazy::new(|| TierTable {
    tiers: vec![
        (trigger(r"published|first[- ]author|peer[- ]reviewed journal|presented at national conference|hhmi fellowship|funded research|annals of surgery|manuscript accepted|led initiative|grant awarded"), 100),
        (trigger(r"poster presentation|local conference|active in lab|volunteered consistently|teaching assistant|case report|department presentation"), 75),
        (trigger(r"involved in research|did volunteer work|interest group|small project|helped with study"), 55),
    ],
    baseline: 30,
});

/// Quality of care the applicant delivered: 95/75/50, baseline 30.
pub fn score_patient_care(text: &str) -> i32 {
    PATIENT_CARE.classify(text)
}

/// Depth of clinical knowledge: 100/75/50, baseline 30.
pub fn score_medical_knowledge(text: &str) -> i32 {
    MEDICAL_KNOWLEDGE.classify(text)
}

/// Communication and teamwork: 90/60/35, baseline 30.
pub fn score_interpersonal(text: &str) -> i32 {
    INTERPERSONAL.classify(text)
}

/// Work ethic and reliability: 95/75/50, baseline 30.
pub fn score_professionalism(text: &str) -> i32 {
    PROFESSIONALISM.classify(text)
}

/// Research and academic output: 100/75/55, baseline 30.
pub fn score_scholarly(text: &str) -> i32 {
    SCHOLARLY.classify(text)
}

/// Seniority of the letter's author, from how they describe themselves.
///
/// Plain substring cascade rather than regex alternations: seniority titles
/// overlap ("associate professor" contains "professor"), and the cascade
/// order decides which tier such a title lands in. Baseline 40 when the
/// author gives no title at all.
pub fn score_author_credibility(text: &str) -> i32 {
    let text = text.to_lowercase();
    if text.contains("program director") || text.contains("chair") {
        100
    } else if text.contains("professor") || text.contains("associate professor") {
        90
    } else if text.contains("assistant professor") {
        70
    } else if text.contains("community physician") {
        50
    } else if text.contains("international") || text.contains("outside the us") {
        30
    } else {
        40
    }
}
