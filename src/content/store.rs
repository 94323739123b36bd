//! Content store
//!
//! Immutable in-memory registry of the portfolio records. Built once
//! at startup; every component reads from it through shared references
//! and nothing writes to it afterwards.

use chrono::NaiveDate;

use crate::content::models::{BlogPost, Category, Profile, Project, SocialLinks};
use crate::error::AppError;

/// Static registry of profile, project, and blog-post records
#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    projects: Vec<Project>,
    posts: Vec<BlogPost>,
}

impl ContentStore {
    /// Build a store from explicit records
    ///
    /// # Errors
    /// Returns a validation error when the profile name is empty or
    /// when a project or post id appears more than once.
    pub fn new(
        profile: Profile,
        projects: Vec<Project>,
        posts: Vec<BlogPost>,
    ) -> Result<Self, AppError> {
        if profile.name.trim().is_empty() {
            return Err(AppError::Validation(
                "profile.name must not be empty".to_string(),
            ));
        }

        ensure_unique_ids("project", projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("post", posts.iter().map(|p| p.id.as_str()))?;

        Ok(Self {
            profile,
            projects,
            posts,
        })
    }

    /// Build the store from the built-in site content
    pub fn seeded() -> Self {
        Self::new(seed_profile(), seed_projects(), seed_posts())
            .expect("seed content must satisfy store invariants")
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects flagged for the home view, in declaration order
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }
}

fn ensure_unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), AppError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Validation(format!(
                "duplicate {kind} id: {id}"
            )));
        }
    }
    Ok(())
}

// =============================================================================
// Seed content
// =============================================================================

fn seed_profile() -> Profile {
    Profile {
        name: "Noa Lindqvist".to_string(),
        title: "Welcome to my corner of the web".to_string(),
        bio: "Crafting digital interfaces with a focus on typography, motion, \
              and clarity. I bridge the gap between rigorous engineering and \
              artistic intent."
            .to_string(),
        socials: SocialLinks {
            github: Some("https://github.com/noalindqvist".to_string()),
            twitter: Some("https://x.com/noalindqvist".to_string()),
            linkedin: None,
            email: Some("hello@noalindqvist.dev".to_string()),
        },
        skills: vec![
            "Rust".to_string(),
            "TypeScript".to_string(),
            "Design Systems".to_string(),
            "Distributed Systems".to_string(),
            "AI Agents".to_string(),
        ],
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "dailyrow".to_string(),
            title: "DailyRow".to_string(),
            description: "A language-learning companion that turns reading, \
                          vocabulary, and writing into one daily feedback loop."
                .to_string(),
            tech_stack: vec![
                "Rust".to_string(),
                "Axum".to_string(),
                "TypeScript".to_string(),
            ],
            link: Some("https://dailyrow.example.com".to_string()),
            repository: None,
            image_url: "/images/project-dailyrow.png".to_string(),
            featured: true,
            gallery: Vec::new(),
        },
        Project {
            id: "culture-bridge".to_string(),
            title: "Culture Bridge".to_string(),
            description: "My first website, built to collect a summer field \
                          study on regional culture into one navigable archive."
                .to_string(),
            tech_stack: vec!["HTML".to_string(), "CSS".to_string()],
            link: Some("https://noalindqvist.github.io/culture-bridge/".to_string()),
            repository: Some("https://github.com/noalindqvist/culture-bridge".to_string()),
            image_url: "/images/project-culture-bridge.jpg".to_string(),
            featured: true,
            gallery: Vec::new(),
        },
        Project {
            id: "artworks".to_string(),
            title: "Art Works".to_string(),
            description: "A rotating selection of my paintings and sketches."
                .to_string(),
            tech_stack: Vec::new(),
            link: None,
            repository: None,
            image_url: "/images/artwork.png".to_string(),
            featured: false,
            gallery: vec![
                "/images/artworks/painting1.png".to_string(),
                "/images/artworks/painting2.png".to_string(),
                "/images/artworks/painting3.png".to_string(),
            ],
        },
    ]
}

fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "minimalism-code".to_string(),
            title: "On Minimalism in Code".to_string(),
            summary: "Why writing less code is the ultimate form of \
                      optimization. A reflection on complexity and maintenance."
                .to_string(),
            body: r#"# Less is More

We often confuse lines of code with productivity. In reality, every line of code is a liability. It is something to be read, understood, tested, and maintained.

## The Aesthetic of Logic

Just as a designer removes elements until nothing else can be taken away, a developer should refactor until the logic is crystalline.

> "Perfection is achieved, not when there is nothing more to add, but when there is nothing left to take away." - Antoine de Saint-Exupéry

### Practical Steps

1. **Delete dead code.**
2. **Abstract responsibly.**
3. **Question dependencies.**
"#
            .to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 14).expect("valid seed date"),
            category: Category::Thoughts,
            read_time: "4 min".to_string(),
        },
        BlogPost {
            id: "typography-screen".to_string(),
            title: "Typography on the Screen".to_string(),
            summary: "Exploring the nuances of rendering serif fonts on \
                      digital displays and the importance of vertical rhythm."
                .to_string(),
            body: r#"# The Serif Return

For years, sans-serif ruled the web. Helvetica, Arial, Inter. They are safe. But they lack the soul of ink on paper.

## Vertical Rhythm

Setting type is about the space *between* the lines as much as the lines themselves. In CSS, `line-height` is your most powerful tool for readability.

```css
p {
  font-family: 'Playfair Display', serif;
  line-height: 1.6;
  max-width: 65ch;
}
```

When we constrain the width of our text, we invite the reader to finish the sentence.
"#
            .to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 2).expect("valid seed date"),
            category: Category::Technical,
            read_time: "6 min".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_profile() -> Profile {
        Profile {
            name: "Test Owner".to_string(),
            title: "Title".to_string(),
            bio: "Bio".to_string(),
            socials: SocialLinks::default(),
            skills: Vec::new(),
        }
    }

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            tech_stack: Vec::new(),
            link: None,
            repository: None,
            image_url: "/images/cover.png".to_string(),
            featured: false,
            gallery: Vec::new(),
        }
    }

    #[test]
    fn seeded_store_is_valid() {
        let store = ContentStore::seeded();
        assert!(!store.profile().name.is_empty());
        assert!(!store.projects().is_empty());
        assert!(!store.posts().is_empty());
    }

    #[test]
    fn rejects_empty_profile_name() {
        let mut profile = minimal_profile();
        profile.name = "   ".to_string();

        let error = ContentStore::new(profile, Vec::new(), Vec::new())
            .expect_err("empty profile name must fail");
        assert!(matches!(error, AppError::Validation(_)));
    }

    #[test]
    fn rejects_duplicate_project_ids() {
        let error =
            ContentStore::new(minimal_profile(), vec![project("p1"), project("p1")], Vec::new())
                .expect_err("duplicate project ids must fail");
        assert!(matches!(
            error,
            AppError::Validation(message) if message.contains("p1")
        ));
    }

    #[test]
    fn lookup_by_id() {
        let store = ContentStore::new(
            minimal_profile(),
            vec![project("p1"), project("p2")],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(store.project("p2").map(|p| p.id.as_str()), Some("p2"));
        assert!(store.project("missing").is_none());
        assert!(store.post("missing").is_none());
    }

    #[test]
    fn featured_projects_filter() {
        let mut p1 = project("p1");
        p1.featured = true;
        let store =
            ContentStore::new(minimal_profile(), vec![p1, project("p2")], Vec::new()).unwrap();

        let featured = store.featured_projects();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "p1");
    }
}
