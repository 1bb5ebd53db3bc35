//! Maps free-text qualification entries onto [`QualificationTier`].
//!
//! The keyword table is walked in priority order and the first tier with a
//! matching keyword wins. Several keywords overlap across tiers (for example
//! `उच्च माध्यमिक` contains `माध्यमिक`), so the order of `TIER_KEYWORDS` is part
//! of the behavior and must not be rearranged.

use super::domain::QualificationTier;

const TIER_KEYWORDS: [(QualificationTier, &[&str]); 6] = [
    (
        QualificationTier::Postgraduate,
        &[
            "स्नातकोत्तर",
            "विद्यावारिधि",
            "एम.ए",
            "एमए",
            "एम.एस्सी",
            "एमबीए",
            "master",
            "post graduate",
            "postgraduate",
            "m.a",
            "mba",
            "m.sc",
            "msc",
            "m.ed",
            "mphil",
            "m.phil",
            "ph.d",
            "phd",
            "llm",
        ],
    ),
    (
        QualificationTier::Bachelors,
        &[
            "स्नातक",
            "बि.ए",
            "बी.ए",
            "बीए",
            "ब्याचलर",
            "bachelor",
            "b.a",
            "bba",
            "b.sc",
            "bsc",
            "b.ed",
            "b.com",
            "llb",
            "mbbs",
            "b.e.",
        ],
    ),
    (
        QualificationTier::Intermediate,
        &[
            "प्रमाणपत्र",
            "उच्च माध्यमिक",
            "प्लस टु",
            "+२",
            "आई.ए",
            "intermediate",
            "higher secondary",
            "plus two",
            "+2",
            "i.a",
            "i.sc",
            "i.com",
            "proficiency",
            "pcl",
        ],
    ),
    (
        QualificationTier::Secondary,
        &[
            "एसएलसी",
            "एस.एल.सी",
            "एसईई",
            "माध्यमिक",
            "प्रवेशिका",
            "slc",
            "s.l.c",
            "s.e.e",
            "matriculation",
            "secondary",
        ],
    ),
    (
        QualificationTier::BelowSecondary,
        &[
            "कक्षा",
            "प्राथमिक",
            "आधारभूत",
            "निम्न",
            "primary",
            "class",
            "grade",
            "basic",
        ],
    ),
    (
        QualificationTier::Literate,
        &["साक्षर", "अनौपचारिक", "literate", "informal", "read and write"],
    ),
];

const FALLBACK_KEYWORDS: [(&str, QualificationTier); 2] = [
    ("graduate", QualificationTier::Bachelors),
    ("school", QualificationTier::Secondary),
];

/// Classify a raw qualification string. Empty input is [`QualificationTier::Other`].
pub fn classify(text: &str) -> QualificationTier {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return QualificationTier::Other;
    }

    TIER_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|(tier, _)| *tier)
        .or_else(|| {
            FALLBACK_KEYWORDS
                .iter()
                .find(|(keyword, _)| normalized.contains(keyword))
                .map(|(_, tier)| *tier)
        })
        .unwrap_or(QualificationTier::Other)
}
