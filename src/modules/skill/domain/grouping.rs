use indexmap::IndexMap;

use crate::modules::content::domain::Skill;

/// Buckets skills by category. Categories keep the order in which they
/// first appear, skills keep their order inside a category.
pub fn group_by_category(skills: &[Skill]) -> IndexMap<String, Vec<Skill>> {
    let mut groups: IndexMap<String, Vec<Skill>> = IndexMap::new();
    for skill in skills {
        groups
            .entry(skill.category.clone())
            .or_default()
            .push(skill.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::sample_content;

    #[test]
    fn categories_follow_first_seen_order() {
        let skills = sample_content().skills;

        let groups = group_by_category(&skills);
        let categories: Vec<&str> = groups.keys().map(String::as_str).collect();

        assert_eq!(
            categories,
            vec!["Programming", "Frontend", "State Management", "Tools"]
        );
    }

    #[test]
    fn keeps_insertion_order_within_category() {
        let skills = sample_content().skills;

        let groups = group_by_category(&skills);
        let frontend: Vec<&str> = groups["Frontend"].iter().map(|s| s.name.as_str()).collect();

        assert_eq!(frontend, vec!["HTML5", "CSS3"]);
    }

    #[test]
    fn union_of_groups_equals_input() {
        let skills = sample_content().skills;

        let groups = group_by_category(&skills);
        let mut flattened: Vec<Skill> = groups.into_values().flatten().collect();
        let mut expected = skills.clone();

        let key = |s: &Skill| (s.category.clone(), s.name.clone());
        flattened.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(flattened, expected);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group_by_category(&[]).is_empty());
    }
}
