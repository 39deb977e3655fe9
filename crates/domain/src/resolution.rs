use crate::record::ResourceRecord;

/// Overall result of resolving one question against the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// At least one matching record; answer section populated.
    Answered,
    /// The name is configured, but carries no records of the requested type.
    NameExistsNoData,
    /// The name is not configured at all.
    NameNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub status: ResolutionStatus,
    pub answers: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl ResolutionResult {
    pub fn answered(answers: Vec<ResourceRecord>) -> Self {
        Self {
            status: ResolutionStatus::Answered,
            answers,
            additional: Vec::new(),
        }
    }

    pub fn no_data() -> Self {
        Self {
            status: ResolutionStatus::NameExistsNoData,
            answers: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn name_not_found() -> Self {
        Self {
            status: ResolutionStatus::NameNotFound,
            answers: Vec::new(),
            additional: Vec::new(),
        }
    }
}
