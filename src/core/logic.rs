use crate::config::Config;
use crate::core::calculator::normalizer::{self, OddLengthPolicy};
use crate::core::calculator::{events, sweep};
use crate::errors::AppResult;
use crate::models::{Attendance, Interval, OverlapReport, Role, RolePresence};

pub struct Core;

impl Core {
    /// Normalized intervals for every role, indexed like `Role::ALL`.
    fn normalize_all(
        attendance: &Attendance,
        policy: OddLengthPolicy,
    ) -> AppResult<[Vec<Interval>; Role::REQUIRED]> {
        let mut out: [Vec<Interval>; Role::REQUIRED] = Default::default();
        for (role, raw) in attendance.iter() {
            out[role.index()] = normalizer::normalize(role, raw, policy)?;
        }
        Ok(out)
    }

    /// Total time during which lesson, pupil and tutor are all present.
    pub fn compute_triple_overlap(attendance: &Attendance, policy: OddLengthPolicy) -> AppResult<u64> {
        let per_role = Self::normalize_all(attendance, policy)?;

        // A role with no valid interval can never be part of the overlap.
        if per_role.iter().any(Vec::is_empty) {
            return Ok(0);
        }

        let evs = events::build_events(per_role.iter().map(Vec::as_slice));
        Ok(sweep::accumulate(evs))
    }

    /// Total plus the overlap segments and per-role presence.
    pub fn build_report(attendance: &Attendance, cfg: &Config) -> AppResult<OverlapReport> {
        let per_role = Self::normalize_all(attendance, cfg.odd_length)?;

        let presence = Role::ALL
            .iter()
            .map(|role| {
                let ivs = &per_role[role.index()];
                RolePresence {
                    role: *role,
                    intervals: ivs.len(),
                    present: ivs.iter().map(Interval::duration).sum(),
                    first_seen: ivs.first().map(Interval::start),
                    last_seen: ivs.last().map(Interval::end),
                }
            })
            .collect();

        let segments = if per_role.iter().any(Vec::is_empty) {
            Vec::new()
        } else {
            sweep::segments(events::build_events(per_role.iter().map(Vec::as_slice)))
        };
        let total = segments.iter().map(Interval::duration).sum();

        tracing::debug!(total, segments = segments.len(), "report built");

        Ok(OverlapReport {
            total,
            segments,
            presence,
        })
    }
}
