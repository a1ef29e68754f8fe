use dioxus::prelude::*;

use crate::pages::archive::visible_tags;

/// Technology tags from a comma-separated list.
///
/// With `limit`, only that many tags are shown followed by a `+N` tag for
/// the rest.
#[component]
pub fn TechTags(technologies: String, #[props(default)] limit: Option<usize>) -> Element {
    let all = api::models::split_technologies(&technologies);
    let (shown, hidden) = visible_tags(&all, limit.unwrap_or(all.len()));

    rsx! {
        div { class: "tech-tags",
            for (i, tech) in shown.into_iter().enumerate() {
                span { key: "{tag_key(i, tech)}", class: "tech-tag", "{tech}" }
            }
            if hidden > 0 {
                span { class: "tech-tag tech-tag-more", "+{hidden}" }
            }
        }
    }
}

/// The same technology may be listed twice, so tags are keyed by position.
fn tag_key(index: usize, tech: &str) -> String {
    format!("{index}-{tech}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_repeated_technology_gets_distinct_keys() {
        let all = api::models::split_technologies("Rust, Rust, Dioxus");
        let keys: HashSet<String> = all
            .iter()
            .enumerate()
            .map(|(i, tech)| tag_key(i, tech))
            .collect();
        assert_eq!(keys.len(), 3);
    }
}
