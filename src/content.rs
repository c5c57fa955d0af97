use crate::page::PathTab;

pub const OWNER: &str = "Mário Sousa";
pub const TAGLINE: &str = "Data Analyst | Business Intelligence Enthusiast";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub blurb: &'static str,
    /// Tailwind color family of the card.
    pub accent: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        name: "Data Analysis",
        blurb: "Turning raw data into meaningful insight through statistical analysis, visualization and predictive modeling.",
        accent: "purple",
    },
    Service {
        name: "ETL Pipelines",
        blurb: "Robust Extract, Transform, Load processes that automate data workflows and keep data accurate and available.",
        accent: "blue",
    },
    Service {
        name: "Business Intelligence",
        blurb: "Interactive dashboards and reports giving real-time visibility into key performance indicators.",
        accent: "cyan",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

const PROFESSIONAL: [TimelineEntry; 2] = [
    TimelineEntry {
        title: "Business Analyst @ Capgemini",
        period: "Oct 2023 - Apr 2024",
        description: "Led data analysis initiatives for enterprise clients, building custom BI solutions for their decision making. Implemented ETL pipelines that cut reporting time by 40% and improved data accuracy.",
    },
    TimelineEntry {
        title: "Football Match Analytics",
        period: "Jan 2024 - Jun 2024",
        description: "Built an analytics system for football match data with predictive models for player performance and match outcomes, plus live dashboards used during matches.",
    },
];

const EDUCATION: [TimelineEntry; 2] = [
    TimelineEntry {
        title: "MSc Data Science",
        period: "2022 - 2024",
        description: "Statistical learning, data engineering and visualization, with a thesis on forecasting retail demand.",
    },
    TimelineEntry {
        title: "BSc Management",
        period: "2019 - 2022",
        description: "Business fundamentals, operations research and an introduction to databases and business intelligence.",
    },
];

pub fn timeline(tab: PathTab) -> &'static [TimelineEntry] {
    match tab {
        PathTab::Professional => &PROFESSIONAL,
        PathTab::Education => &EDUCATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_entries() {
        for tab in PathTab::ALL {
            assert!(!timeline(tab).is_empty(), "{} is empty", tab.label());
        }
    }

    #[test]
    fn test_service_names_are_unique() {
        let mut names = SERVICES.map(|s| s.name).to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SERVICES.len());
    }
}
