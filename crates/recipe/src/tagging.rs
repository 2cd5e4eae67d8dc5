//! Automatic labels derived from a recipe's text.
//!
//! When the title, description, ingredients or herbs mention one of the
//! keywords of a rule, that rule's labels are appended to the tags the
//! author entered, skipping labels already present.

struct Rule {
    keywords: &'static [&'static str],
    labels: &'static [&'static str],
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["curry", "tikka", "masala"],
        labels: &["Curry", "Indiaas"],
    },
    Rule {
        keywords: &["stamppot"],
        labels: &["Comfortfood", "Hollands"],
    },
    Rule {
        keywords: &["salade", "salad"],
        labels: &["Gezond", "Salade"],
    },
    Rule {
        keywords: &["pasta"],
        labels: &["Pasta", "Italiaans"],
    },
    Rule {
        keywords: &["soep"],
        labels: &["Soep", "Comfortfood"],
    },
    Rule {
        keywords: &["wrap"],
        labels: &["Snel", "Lunch"],
    },
    Rule {
        keywords: &["smoothie"],
        labels: &["Gezond", "Drankje"],
    },
    Rule {
        keywords: &["pizza"],
        labels: &["Pizza", "Italiaans"],
    },
    Rule {
        keywords: &["rijst"],
        labels: &["Aziatisch"],
    },
];

/// Splits a comma separated tag field, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn auto_tag(mut tags: Vec<String>, text: &str) -> Vec<String> {
    let text = text.to_lowercase();

    for rule in RULES {
        if !rule.keywords.iter().any(|kw| text.contains(kw)) {
            continue;
        }

        for label in rule.labels {
            if !tags.iter().any(|t| t.as_str() == *label) {
                tags.push((*label).to_owned());
            }
        }
    }

    tags
}
