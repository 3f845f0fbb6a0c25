//! Course list with a grade point average
//!

use std::str::FromStr;

use cabinet_registry_shared::RegistryError;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Sequence)]
pub enum Grade {
    #[default]
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
    /// Withdrawn, left out of the average entirely
    W,
}

impl Grade {
    pub fn points(&self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::BPlus => 3.5,
            Grade::B => 3.0,
            Grade::CPlus => 2.5,
            Grade::C => 2.0,
            Grade::DPlus => 1.5,
            Grade::D => 1.0,
            Grade::F | Grade::W => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
            Grade::W => "W",
        }
    }

    pub fn is_withdrawn(&self) -> bool {
        matches!(self, Grade::W)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<Grade>()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| RegistryError::Other(format!("{:?} is not a valid grade", s)))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub grade: Grade,
}

#[derive(Debug, Default)]
pub struct Gradebook {
    courses: Vec<Course>,
    gpa: Option<f64>,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course. Blank names are ignored and return false.
    pub fn add_course(&mut self, name: &str, grade: Grade) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        debug!("Adding course {} ({})", name, grade);
        self.courses.push(Course {
            name: name.to_string(),
            grade,
        });
        self.gpa = None;
        true
    }

    pub fn remove_course(&mut self, index: usize) -> Option<Course> {
        if index >= self.courses.len() {
            return None;
        }
        self.gpa = None;
        Some(self.courses.remove(index))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// The last calculated average, cleared whenever the course list changes
    pub fn gpa(&self) -> Option<f64> {
        self.gpa
    }

    pub fn calculate_gpa(&mut self) -> f64 {
        let gpa = average_points(&self.courses);
        self.gpa = Some(gpa);
        gpa
    }
}

/// Mean grade points of the non-withdrawn courses, rounded to two decimals.
/// Zero when nothing counts.
pub fn average_points(courses: &[Course]) -> f64 {
    let counted: Vec<f64> = courses
        .iter()
        .filter(|course| !course.grade.is_withdrawn())
        .map(|course| course.grade.points())
        .collect();
    if counted.is_empty() {
        return 0.0;
    }
    let mean = counted.iter().sum::<f64>() / counted.len() as f64;
    (mean * 100.0).round() / 100.0
}
