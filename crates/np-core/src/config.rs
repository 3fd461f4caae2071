//! Configuration types and parsing for nhoods.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file names probed in a project directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["nhoods.yml", "nhoods.yaml"];

/// Main project configuration from nhoods.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name, shown in progress output
    pub name: String,

    /// HTML report template, relative to the templates directory
    #[serde(default = "default_profile_template")]
    pub profile_template: String,

    /// Map template listing the GIS layers, relative to the templates directory
    #[serde(default = "default_map_template")]
    pub map_template: String,

    /// Input and output locations, relative to the project root
    #[serde(default)]
    pub paths: PathsConfig,

    /// Names of the layers queried from the map template
    #[serde(default)]
    pub layers: LayerNames,

    /// Attribute field names read from those layers
    #[serde(default)]
    pub fields: FieldNames,

    /// External HTML to PDF converter
    #[serde(default)]
    pub pdf: PdfConfig,

    /// URL shortening for published profiles
    #[serde(default)]
    pub shortener: ShortenerConfig,
}

/// Project-relative locations of inputs and outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub templates: String,
    pub descriptions: String,
    pub profiles: String,
    pub ward_reps: String,
    pub guide_docs: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates: "templates".to_string(),
            descriptions: "descriptions".to_string(),
            profiles: "profiles".to_string(),
            ward_reps: "data/WardReps.csv".to_string(),
            guide_docs: "data/GuidingDocs.csv".to_string(),
        }
    }
}

/// Layer names as they appear in the map template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayerNames {
    pub neighborhoods: String,
    /// Neighborhood boundaries expanded by a fixed distance
    pub buffers: String,
    pub parks: String,
    pub schools: String,
    pub groceries: String,
    pub public_facilities: String,
    pub historic_sites: String,
    pub trails: String,
    /// Census blocks carrying the population field
    pub blocks: String,
    /// Census blocks carrying population added by permits since the census
    pub permit_blocks: Option<String>,
}

impl Default for LayerNames {
    fn default() -> Self {
        Self {
            neighborhoods: "Nhoods".to_string(),
            buffers: "nhood_buffers".to_string(),
            parks: "ParksAndCommons".to_string(),
            schools: "Schools".to_string(),
            groceries: "SuperMarkets".to_string(),
            public_facilities: "PublicFacilities".to_string(),
            historic_sites: "HistoricSites".to_string(),
            trails: "Trails".to_string(),
            blocks: "Blocks".to_string(),
            permit_blocks: None,
        }
    }
}

impl LayerNames {
    /// Every layer the collector reads, including the optional permit layer.
    pub fn required(&self) -> Vec<&str> {
        let mut names = vec![
            self.neighborhoods.as_str(),
            self.buffers.as_str(),
            self.parks.as_str(),
            self.schools.as_str(),
            self.groceries.as_str(),
            self.public_facilities.as_str(),
            self.historic_sites.as_str(),
            self.trails.as_str(),
            self.blocks.as_str(),
        ];
        if let Some(permits) = &self.permit_blocks {
            names.push(permits.as_str());
        }
        names
    }
}

/// Attribute field names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldNames {
    /// Neighborhood name, shared by the neighborhoods and buffers layers
    pub name: String,
    pub year_created: String,
    pub acres: String,
    pub park_name: String,
    pub park_acres: String,
    pub school_name: String,
    pub grocery_name: String,
    pub facility_name: String,
    pub historic_name: String,
    pub trail_miles: String,
    pub population: String,
    pub new_population: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            year_created: "Year_Created".to_string(),
            acres: "Acres".to_string(),
            park_name: "Name".to_string(),
            park_acres: "Acres".to_string(),
            school_name: "School".to_string(),
            grocery_name: "STORE_NAME".to_string(),
            facility_name: "FACILITY_NAME".to_string(),
            historic_name: "Name".to_string(),
            trail_miles: "trail_miles".to_string(),
            population: "TOTAL_POP.D001".to_string(),
            new_population: "new_pop".to_string(),
        }
    }
}

/// External HTML to PDF converter invocation.
///
/// `{input}` and `{output}` in `args` are replaced with the HTML path and the
/// sibling `.pdf` path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PdfConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            program: "wkhtmltopdf".to_string(),
            args: vec![
                "--quiet".to_string(),
                "{input}".to_string(),
                "{output}".to_string(),
            ],
        }
    }
}

/// URL shortening settings for `np shorten`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShortenerConfig {
    /// Endpoint the public URL is appended to
    pub api: String,
    /// Directory the published profiles are copied to
    pub share_dir: Option<String>,
    /// Public URL prefix of `share_dir`
    pub base_url: Option<String>,
    /// Output spreadsheet, relative to the project root
    pub output: String,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            api: "http://tinyurl.com/api-create.php?url=".to_string(),
            share_dir: None,
            base_url: None,
            output: "TinyURLs.csv".to_string(),
        }
    }
}

/// Feature layers queried identically for presence near a neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Parks,
    Schools,
    Groceries,
    PublicFacilities,
    HistoricSites,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Parks,
        AssetCategory::Schools,
        AssetCategory::Groceries,
        AssetCategory::PublicFacilities,
        AssetCategory::HistoricSites,
    ];
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetCategory::Parks => write!(f, "parks"),
            AssetCategory::Schools => write!(f, "schools"),
            AssetCategory::Groceries => write!(f, "groceries"),
            AssetCategory::PublicFacilities => write!(f, "public facilities"),
            AssetCategory::HistoricSites => write!(f, "historic sites"),
        }
    }
}

fn default_profile_template() -> String {
    "profile_template.html".to_string()
}

fn default_map_template() -> String {
    "nhood_template.yml".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for nhoods.yml or nhoods.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        for file_name in CONFIG_FILE_NAMES {
            let path = dir.join(file_name);
            if path.exists() {
                return Self::load(&path);
            }
        }
        Err(CoreError::ConfigNotFound {
            path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
        })
    }

    /// Layer and name field queried for an asset category.
    pub fn asset_source(&self, category: AssetCategory) -> (&str, &str) {
        let (layers, fields) = (&self.layers, &self.fields);
        match category {
            AssetCategory::Parks => (&layers.parks, &fields.park_name),
            AssetCategory::Schools => (&layers.schools, &fields.school_name),
            AssetCategory::Groceries => (&layers.groceries, &fields.grocery_name),
            AssetCategory::PublicFacilities => {
                (&layers.public_facilities, &fields.facility_name)
            }
            AssetCategory::HistoricSites => (&layers.historic_sites, &fields.historic_name),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if let Some(empty) = self.layers.required().iter().find(|l| l.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: format!("Layer names cannot be empty (found '{}')", empty),
            });
        }

        if self.pdf.program.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "pdf.program cannot be empty".to_string(),
            });
        }

        if !self.pdf.args.iter().any(|a| a.contains("{input}")) {
            return Err(CoreError::ConfigInvalid {
                message: "pdf.args must reference {input}".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
