use chrono::NaiveDate;
use pulldown_cmark::{Options, Parser};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use gray_matter::{engine::YAML, Matter};

/// Project catalog, built once from the embedded markdown files.
pub static CATALOG: LazyLock<Vec<Project>> = LazyLock::new(load_catalog);

#[derive(Embed)]
#[folder = "projects"]
pub struct ProjectAssets;

#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    description: String,
    date: NaiveDate,
    image: String,
    technologies: Vec<String>,
    demo_url: Option<String>,
    github_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// README rendered to HTML.
    pub readme: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub date: NaiveDate,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
}

impl Project {
    pub fn display_date(&self) -> String {
        self.date.format("%B %Y").to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("project file {0} is not valid UTF-8")]
    Encoding(String),
    #[error("couldn't parse front matter of project {0}")]
    FrontMatter(String),
}

pub fn parse_project(id: &str, content: &str) -> Result<Project, CatalogError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| CatalogError::FrontMatter(id.to_string()))?;
    let fm = parsed.data;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut readme = String::new();
    pulldown_cmark::html::push_html(&mut readme, parser);

    Ok(Project {
        id: id.to_string(),
        title: fm.title,
        description: fm.description,
        readme,
        image_url: fm.image,
        technologies: fm.technologies,
        date: fm.date,
        demo_url: fm.demo_url,
        github_url: fm.github_url,
    })
}

fn load_catalog() -> Vec<Project> {
    let mut projects = ProjectAssets::iter()
        .filter_map(|path| {
            let id = path.strip_suffix(".md").unwrap_or(&path).to_string();
            let file = ProjectAssets::get(&path)?;
            let res = String::from_utf8(file.data.into_owned())
                .map_err(|_| CatalogError::Encoding(path.to_string()))
                .and_then(|content| parse_project(&id, &content));
            match res {
                Ok(p) => Some(p),
                Err(e) => {
                    log::error!("skipping project: {e}");
                    None
                }
            }
        })
        .collect::<Vec<_>>();
    // oldest first, the timeline reads left to right
    projects.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
    projects
}

pub fn catalog() -> &'static [Project] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static Project> {
    catalog().iter().find(|p| p.id == id)
}

/// The single "selected project" slot behind the detail modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    /// Selects a catalog entry. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        if find(id).is_none() {
            return false;
        }
        self.0 = Some(id.to_string());
        true
    }

    pub fn dismiss(&mut self) {
        self.0 = None;
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.0.as_deref().and_then(find)
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"---
title: Sample Project
description: Something small
date: 2024-03-05
image: /images/projects/sample.svg
technologies:
  - Rust
  - SQL
github_url: https://github.com/example/sample
---
# Sample Project

## Overview
Some **bold** text.
"#;

    #[test]
    fn test_parse_project() {
        let p = parse_project("sample", SAMPLE).expect("sample should parse");
        assert_eq!(p.id, "sample");
        assert_eq!(p.title, "Sample Project");
        assert_eq!(p.technologies, vec!["Rust", "SQL"]);
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(p.display_date(), "March 2024");
        assert_eq!(p.demo_url, None);
        assert_eq!(
            p.github_url.as_deref(),
            Some("https://github.com/example/sample")
        );
        assert!(p.readme.contains("<h2>Overview</h2>"));
        assert!(p.readme.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_parse_project_without_front_matter() {
        let res = parse_project("broken", "# Just a heading\n");
        assert_eq!(res, Err(CatalogError::FrontMatter("broken".to_string())));
    }

    #[test]
    fn test_catalog_is_sorted_and_complete() {
        let projects = catalog();
        assert!(!projects.is_empty());
        assert!(projects.windows(2).all(|w| w[0].date <= w[1].date));
        for p in projects {
            assert!(!p.title.is_empty());
            assert!(!p.technologies.is_empty());
            assert!(!p.readme.is_empty());
        }
    }

    #[test]
    fn test_selection() {
        let first = &catalog()[0];
        let mut selection = Selection::default();
        assert!(!selection.is_open());

        assert!(selection.select(&first.id));
        assert_eq!(selection.selected(), Some(first));

        assert!(!selection.select("does-not-exist"));
        assert_eq!(selection.selected(), Some(first));

        selection.dismiss();
        assert_eq!(selection.selected(), None);
        assert!(!selection.is_open());
    }
}
