//! Localized validation messages, one sentence per field
//!

use cabinet_registry_shared::Field;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Thai,
    English,
}

/// Why a single selected file was refused
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AttachmentProblem {
    /// More than one file was selected
    NotSingle,
    NotAnImage,
    TooLarge,
}

/// The message shown when a field is missing or holds a value outside its option set
pub fn field_message(field: Field, locale: Locale) -> &'static str {
    match locale {
        Locale::Thai => match field {
            Field::Prefix => "กรุณาเลือกคำนำหน้า",
            Field::FirstName => "กรุณากรอกชื่อ",
            Field::LastName => "กรุณากรอกนามสกุล",
            Field::Attachment => "กรุณาอัปโหลดรูปถ่าย 2 นิ้ว",
            Field::WorkHistory => "กรุณากรอกประวัติการทำงาน",
            Field::PrimaryRole => "กรุณาเลือกตำแหน่งรัฐมนตรี",
            Field::SecondaryRole => "กรุณาเลือกตำแหน่งรองจากรายการ",
            Field::Department => "กรุณาเลือกกระทรวง",
            Field::Affiliation => "กรุณาเลือกพรรค",
        },
        Locale::English => match field {
            Field::Prefix => "Please select a prefix.",
            Field::FirstName => "Please enter a first name.",
            Field::LastName => "Please enter a last name.",
            Field::Attachment => "Please upload a single 2-inch photo.",
            Field::WorkHistory => "Please enter the work history.",
            Field::PrimaryRole => "Please select a cabinet position.",
            Field::SecondaryRole => "Please pick the secondary position from the list.",
            Field::Department => "Please select a ministry.",
            Field::Affiliation => "Please select a party.",
        },
    }
}

pub fn attachment_message(problem: AttachmentProblem, locale: Locale) -> &'static str {
    match (problem, locale) {
        (AttachmentProblem::NotSingle, _) => field_message(Field::Attachment, locale),
        (AttachmentProblem::NotAnImage, Locale::Thai) => "ไฟล์รูปถ่ายต้องเป็นไฟล์รูปภาพ",
        (AttachmentProblem::NotAnImage, Locale::English) => "The photo must be an image file.",
        (AttachmentProblem::TooLarge, Locale::Thai) => "ไฟล์รูปถ่ายมีขนาดใหญ่เกินไป",
        (AttachmentProblem::TooLarge, Locale::English) => "The photo file is too large.",
    }
}

#[test]
fn test_every_field_has_a_message() {
    for field in enum_iterator::all::<Field>() {
        assert!(!field_message(field, Locale::Thai).is_empty());
        assert!(field_message(field, Locale::English).ends_with('.'));
    }
    assert_eq!(
        attachment_message(AttachmentProblem::NotSingle, Locale::Thai),
        "กรุณาอัปโหลดรูปถ่าย 2 นิ้ว"
    );
}
