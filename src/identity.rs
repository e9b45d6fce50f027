use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MalformedIdentityError, MalformedReason};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdentity {
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
}

/// Folder naming scheme of the exporting system. Always chosen by the caller,
/// never sniffed from the names themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingConvention {
    Moodle,
    #[serde(alias = "Test-Drive")]
    TestDrive,
}

impl NamingConvention {
    pub fn as_str(self) -> &'static str {
        match self {
            NamingConvention::Moodle => "Moodle",
            NamingConvention::TestDrive => "TestDrive",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moodle" => Ok(NamingConvention::Moodle),
            "testdrive" | "test-drive" => Ok(NamingConvention::TestDrive),
            other => Err(format!("unknown naming convention: {other}")),
        }
    }
}

/// Moodle export folders look like `J1234567-Jane Doe_assignsubmission_file`.
///
/// The character in front of the student number is a marker added by Moodle
/// and is dropped. With more than two name tokens the last two form the
/// surname.
pub fn parse_moodle(folder_name: &str) -> Result<StudentIdentity, MalformedIdentityError> {
    let malformed = |reason| MalformedIdentityError::new(folder_name, reason);

    let (raw_number, name_block) = folder_name
        .split_once('-')
        .ok_or_else(|| malformed(MalformedReason::MissingSeparator))?;

    let mut number_chars = raw_number.chars();
    number_chars.next();
    let student_number = number_chars.as_str();
    if student_number.is_empty() {
        return Err(malformed(MalformedReason::MissingStudentNumber));
    }

    let names = name_block.split('_').next().unwrap_or("");
    let tokens: Vec<&str> = names.split_whitespace().collect();

    let (first_name, last_name) = match tokens.len() {
        0 => return Err(malformed(MalformedReason::MissingName)),
        1 => return Err(malformed(MalformedReason::MissingSurname)),
        2 => (tokens[0].to_string(), tokens[1].to_string()),
        n => (tokens[..n - 2].join(" "), tokens[n - 2..].join(" ")),
    };

    Ok(StudentIdentity {
        first_name,
        last_name,
        student_number: student_number.to_string(),
    })
}

/// Test-Drive exports put the name in the folder (`Jane-Doe`) and the
/// student number in the file (`script-1234567.pdf`).
pub fn parse_test_drive(
    folder_name: &str,
    file_name: &str,
) -> Result<StudentIdentity, MalformedIdentityError> {
    let folder_parts: Vec<&str> = folder_name.split('-').collect();
    if folder_parts.len() < 2 {
        return Err(MalformedIdentityError::new(
            folder_name,
            MalformedReason::FolderSegments,
        ));
    }

    let file_parts: Vec<&str> = file_name.split('-').collect();
    if file_parts.len() < 2 {
        return Err(MalformedIdentityError::new(
            file_name,
            MalformedReason::FileSegments,
        ));
    }

    let student_number = file_parts[1]
        .strip_suffix(".pdf")
        .unwrap_or(file_parts[1]);
    if student_number.is_empty() {
        return Err(MalformedIdentityError::new(
            file_name,
            MalformedReason::MissingStudentNumber,
        ));
    }

    Ok(StudentIdentity {
        first_name: folder_parts[0].to_string(),
        last_name: folder_parts[1].to_string(),
        student_number: student_number.to_string(),
    })
}

pub fn parse_identity(
    convention: NamingConvention,
    folder_name: &str,
    file_name: &str,
) -> Result<StudentIdentity, MalformedIdentityError> {
    match convention {
        NamingConvention::Moodle => parse_moodle(folder_name),
        NamingConvention::TestDrive => parse_test_drive(folder_name, file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moodle_two_tokens() {
        let id = parse_moodle("J1234567-Jane Doe").expect("parse");
        assert_eq!(id.first_name, "Jane");
        assert_eq!(id.last_name, "Doe");
        assert_eq!(id.student_number, "1234567");
    }

    #[test]
    fn moodle_drops_underscore_suffix() {
        let id = parse_moodle("s221234567-Thabo Mokoena_12345_assignsubmission_file")
            .expect("parse");
        assert_eq!(id.first_name, "Thabo");
        assert_eq!(id.last_name, "Mokoena");
        assert_eq!(id.student_number, "221234567");
    }

    #[test]
    fn moodle_long_names_take_last_two_as_surname() {
        let id = parse_moodle("X555-Mary Anne Van Wyk_file").expect("parse");
        assert_eq!(id.first_name, "Mary Anne");
        assert_eq!(id.last_name, "Van Wyk");

        let id = parse_moodle("X555-Anna de Villiers").expect("parse");
        assert_eq!(id.first_name, "Anna");
        assert_eq!(id.last_name, "de Villiers");
    }

    #[test]
    fn moodle_keeps_hyphens_after_the_first() {
        let id = parse_moodle("J42-Sipho Nkosi-Dlamini").expect("parse");
        assert_eq!(id.student_number, "42");
        assert_eq!(id.last_name, "Nkosi-Dlamini");
    }

    #[test]
    fn moodle_rejects_missing_parts() {
        let e = parse_moodle("J1234567 Jane Doe").unwrap_err();
        assert_eq!(e.reason, MalformedReason::MissingSeparator);
        assert_eq!(e.raw, "J1234567 Jane Doe");

        let e = parse_moodle("J1234567-Jane").unwrap_err();
        assert_eq!(e.reason, MalformedReason::MissingSurname);

        let e = parse_moodle("J1234567-_file").unwrap_err();
        assert_eq!(e.reason, MalformedReason::MissingName);

        let e = parse_moodle("J-Jane Doe").unwrap_err();
        assert_eq!(e.reason, MalformedReason::MissingStudentNumber);
    }

    #[test]
    fn test_drive_basic() {
        let id = parse_test_drive("Jane-Doe", "script-1234567.pdf").expect("parse");
        assert_eq!(id.first_name, "Jane");
        assert_eq!(id.last_name, "Doe");
        assert_eq!(id.student_number, "1234567");
    }

    #[test]
    fn test_drive_ignores_extra_segments() {
        let id = parse_test_drive("Jane-Doe-extra-bits", "test1-987-v2.pdf").expect("parse");
        assert_eq!(id.last_name, "Doe");
        assert_eq!(id.student_number, "987");
    }

    #[test]
    fn test_drive_rejects_short_names() {
        let e = parse_test_drive("JaneDoe", "script-1.pdf").unwrap_err();
        assert_eq!(e.reason, MalformedReason::FolderSegments);
        let e = parse_test_drive("Jane-Doe", "script.pdf").unwrap_err();
        assert_eq!(e.reason, MalformedReason::FileSegments);
        assert_eq!(e.raw, "script.pdf");
    }

    #[test]
    fn convention_from_str() {
        assert_eq!("Moodle".parse::<NamingConvention>(), Ok(NamingConvention::Moodle));
        assert_eq!("Test-Drive".parse::<NamingConvention>(), Ok(NamingConvention::TestDrive));
        assert_eq!("testdrive".parse::<NamingConvention>(), Ok(NamingConvention::TestDrive));
        assert!("zip".parse::<NamingConvention>().is_err());
    }
}
