//! Project submission schema, content variants, and defaulting rules.
//!
//! [`ProjectSubmission`] is the one place the required-field list lives. The
//! create endpoint runs it through [`ProjectSubmission::into_new_project`];
//! callers that want to pre-check a form use
//! [`ProjectSubmission::missing_fields`] and get the exact same answer.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Content type and gradient style
   -------------------------------------------------------------------------- */

/// Discriminator stored in `projects.content_type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Gradient,
    Image,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Gradient, ContentType::Image];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Gradient => "gradient",
            ContentType::Image => "image",
        }
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid content_type '{s}'. Must be one of: {}",
                    join_names(Self::ALL.iter().map(|c| c.as_str()))
                ))
            })
    }
}

/// Background gradient used when a project has no image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientStyle {
    #[default]
    CyanEmerald,
    PinkIndigo,
    OrangeYellow,
}

impl GradientStyle {
    pub const ALL: [GradientStyle; 3] = [
        GradientStyle::CyanEmerald,
        GradientStyle::PinkIndigo,
        GradientStyle::OrangeYellow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GradientStyle::CyanEmerald => "cyan-emerald",
            GradientStyle::PinkIndigo => "pink-indigo",
            GradientStyle::OrangeYellow => "orange-yellow",
        }
    }
}

impl FromStr for GradientStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid background_color '{s}'. Must be one of: {}",
                    join_names(Self::ALL.iter().map(|g| g.as_str()))
                ))
            })
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/* --------------------------------------------------------------------------
   Content variant
   -------------------------------------------------------------------------- */

/// What a project card shows: a gradient or an image.
///
/// Only the field belonging to the active variant is ever persisted; the
/// other column is written as NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectContent {
    Gradient { style: GradientStyle },
    Image { url: Option<String> },
}

impl Default for ProjectContent {
    fn default() -> Self {
        ProjectContent::Gradient {
            style: GradientStyle::default(),
        }
    }
}

impl ProjectContent {
    /// Build the variant from the three loose columns/fields.
    ///
    /// A missing `content_type` means gradient and a missing
    /// `background_color` means cyan-emerald. Fields that do not belong to the
    /// selected variant are ignored, including invalid values in them.
    pub fn from_parts(
        content_type: Option<&str>,
        background_color: Option<&str>,
        image_url: Option<String>,
    ) -> Result<Self, CoreError> {
        let content_type = content_type
            .map(ContentType::from_str)
            .transpose()?
            .unwrap_or_default();

        match content_type {
            ContentType::Gradient => {
                let style = background_color
                    .map(GradientStyle::from_str)
                    .transpose()?
                    .unwrap_or_default();
                Ok(ProjectContent::Gradient { style })
            }
            ContentType::Image => Ok(ProjectContent::Image { url: image_url }),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            ProjectContent::Gradient { .. } => ContentType::Gradient,
            ProjectContent::Image { .. } => ContentType::Image,
        }
    }

    pub fn background_color(&self) -> Option<GradientStyle> {
        match self {
            ProjectContent::Gradient { style } => Some(*style),
            ProjectContent::Image { .. } => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            ProjectContent::Gradient { .. } => None,
            ProjectContent::Image { url } => url.as_deref(),
        }
    }
}

/* --------------------------------------------------------------------------
   Submission schema
   -------------------------------------------------------------------------- */

/// Raw create payload as sent by the admin form.
///
/// Every field is optional on the wire so that a missing field is reported
/// through [`MissingFields`] instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectSubmission {
    #[validate(required)]
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_year")]
    #[validate(required)]
    pub year: Option<i32>,
    #[validate(required)]
    pub description: Option<String>,
    #[validate(required)]
    pub url: Option<String>,
    pub content_type: Option<String>,
    pub background_color: Option<String>,
    pub image_url: Option<String>,
}

/// A submission that passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub url: String,
    pub content: ProjectContent,
}

impl ProjectSubmission {
    /// Treat blank text fields as absent.
    ///
    /// Non-blank values are kept verbatim so the stored record echoes the
    /// input; only the enum discriminators are trimmed before parsing.
    pub fn normalized(self) -> Self {
        Self {
            title: non_blank(self.title),
            year: self.year,
            description: non_blank(self.description),
            url: non_blank(self.url),
            content_type: non_blank(self.content_type).map(|v| v.trim().to_string()),
            background_color: non_blank(self.background_color).map(|v| v.trim().to_string()),
            image_url: non_blank(self.image_url),
        }
    }

    /// Report which required fields are missing, or `None` if all are present.
    pub fn missing_fields(&self) -> Option<MissingFields> {
        self.clone().normalized().missing_report()
    }

    fn missing_report(&self) -> Option<MissingFields> {
        self.validate()
            .err()
            .map(|errors| MissingFields::from_errors(&errors))
    }

    /// Validate the submission and apply defaults.
    ///
    /// Missing required fields are checked first and reported together; enum
    /// values are only parsed once every required field is present.
    pub fn into_new_project(self) -> Result<NewProject, CoreError> {
        let submission = self.normalized();

        match (
            submission.missing_report(),
            submission.title,
            submission.year,
            submission.description,
            submission.url,
        ) {
            (None, Some(title), Some(year), Some(description), Some(url)) => {
                let content = ProjectContent::from_parts(
                    submission.content_type.as_deref(),
                    submission.background_color.as_deref(),
                    submission.image_url,
                )?;
                Ok(NewProject {
                    title,
                    year,
                    description,
                    url,
                    content,
                })
            }
            (report, ..) => Err(CoreError::MissingFields(report.unwrap_or_default())),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept the year as a JSON number or a numeric string.
///
/// HTML number inputs hand their value over as a string once edited, and an
/// emptied input arrives as `""`, which counts as missing.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearInput {
        Number(i64),
        Text(String),
    }

    match Option::<YearInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(YearInput::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("year {n} is out of range"))),
        Some(YearInput::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("year '{trimmed}' is not a whole number")))
        }
    }
}

/* --------------------------------------------------------------------------
   Missing-field report
   -------------------------------------------------------------------------- */

/// Per-field report for the four required fields.
///
/// Each entry is `Some(reason)` when that field was missing and `None`
/// otherwise; it serializes with explicit nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingFields {
    pub title: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl MissingFields {
    fn from_errors(errors: &ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let reason = |name: &str| fields.get(name).map(|_| required_message(name));
        Self {
            title: reason("title"),
            year: reason("year"),
            description: reason("description"),
            url: reason("url"),
        }
    }

    /// Names of the missing fields, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("year", &self.year),
            ("description", &self.description),
            ("url", &self.url),
        ]
        .into_iter()
        .filter_map(|(name, reason)| reason.as_ref().map(|_| name))
        .collect()
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

fn required_message(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!("{}{} is required", first.to_uppercase(), chars.as_str()),
        None => "Field is required".to_string(),
    }
}
