use crate::additional;
use crate::zone::ZoneIndex;
use basalt_dns_domain::{
    DomainName, QueryType, Question, RecordData, RecordType, ResolutionResult,
};
use std::sync::Arc;

/// Resolves questions against a fixed zone snapshot.
///
/// Resolution is a pure function of the index and the question: the same
/// pair always yields the same result, and no query-time input has a
/// failure path.
pub struct Resolver {
    zone: Arc<ZoneIndex>,
}

impl Resolver {
    pub fn new(zone: Arc<ZoneIndex>) -> Self {
        Self { zone }
    }

    pub fn resolve(&self, question: &Question) -> ResolutionResult {
        let mut result = match question.qtype {
            QueryType::Any => self.resolve_any(&question.name),
            QueryType::Record(rtype) => self.resolve_typed(&question.name, rtype),
        };
        result.additional = additional::assemble(&self.zone, &result.answers);
        result
    }

    /// ANY surfaces everything stored under the name, ordered by the fixed
    /// type precedence and insertion order within each type.
    fn resolve_any(&self, name: &DomainName) -> ResolutionResult {
        let mut answers = Vec::new();
        for rtype in RecordType::ANY_ORDER {
            answers.extend_from_slice(self.zone.find(name, rtype));
        }
        if answers.is_empty() {
            ResolutionResult::name_not_found()
        } else {
            ResolutionResult::answered(answers)
        }
    }

    fn resolve_typed(&self, name: &DomainName, rtype: RecordType) -> ResolutionResult {
        let direct = self.zone.find(name, rtype);
        if !direct.is_empty() {
            return ResolutionResult::answered(direct.to_vec());
        }

        // Single-hop CNAME chase: the CNAME itself leads the answers,
        // followed by whatever the original qtype resolves to at the
        // target. A target outside the zone still leaves a complete
        // answer. Never chased past one indirection.
        if rtype != RecordType::CNAME {
            let cnames = self.zone.find(name, RecordType::CNAME);
            if !cnames.is_empty() {
                let mut answers = cnames.to_vec();
                if let RecordData::Cname(target) = &cnames[0].data {
                    answers.extend_from_slice(self.zone.find(target, rtype));
                }
                return ResolutionResult::answered(answers);
            }
        }

        if self.zone.name_exists(name) {
            ResolutionResult::no_data()
        } else {
            ResolutionResult::name_not_found()
        }
    }
}
