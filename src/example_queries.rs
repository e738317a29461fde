//! Example questions the user can submit with one keystroke

pub mod example_render;

use crate::config::ExamplesConfig;

/// Alt+1..Alt+9 / F1..F9
pub const MAX_SHORTCUTS: usize = 9;

const CUSTOM_CATEGORY: &str = "Custom";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleGroup {
    pub category: String,
    pub queries: Vec<String>,
}

/// Numbered example list; numbering runs across groups starting at 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleQueries {
    groups: Vec<ExampleGroup>,
}

impl Default for ExampleQueries {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExampleQueries {
    /// Questions the Samarth backend advertises as good starting points
    pub fn builtin() -> Self {
        let group = |category: &str, queries: &[&str]| ExampleGroup {
            category: category.to_string(),
            queries: queries.iter().map(|q| q.to_string()).collect(),
        };

        Self {
            groups: vec![
                group(
                    "Comparison",
                    &[
                        "Compare rainfall in Chennai vs Coimbatore",
                        "Compare crop production between Raichur and Belagavi districts",
                    ],
                ),
                group(
                    "Ranking",
                    &[
                        "Which district has the highest crop production in Karnataka?",
                        "Top 5 districts by rainfall in Tamil Nadu",
                    ],
                ),
                group(
                    "Analysis",
                    &[
                        "What is the average rainfall across Tamil Nadu?",
                        "Which season contributes most to crop production?",
                    ],
                ),
                group(
                    "Specific Data",
                    &[
                        "Crop production data for Mysuru district",
                        "Rainfall data for Salem district",
                        "What is the yield in Hassan district?",
                    ],
                ),
            ],
        }
    }

    /// Configured questions replace the built-in list; blanks are skipped and
    /// only the first nine are kept since only nine shortcuts exist
    pub fn from_config(config: &ExamplesConfig) -> Self {
        let queries: Vec<String> = config
            .queries
            .iter()
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .take(MAX_SHORTCUTS)
            .map(str::to_string)
            .collect();

        if queries.is_empty() {
            return Self::builtin();
        }

        Self {
            groups: vec![ExampleGroup {
                category: CUSTOM_CATEGORY.to_string(),
                queries,
            }],
        }
    }

    pub fn groups(&self) -> &[ExampleGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.queries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Example by 1-based shortcut number
    pub fn get(&self, number: usize) -> Option<&str> {
        if number == 0 || number > MAX_SHORTCUTS {
            return None;
        }
        self.groups
            .iter()
            .flat_map(|g| g.queries.iter())
            .nth(number - 1)
            .map(String::as_str)
    }
}
