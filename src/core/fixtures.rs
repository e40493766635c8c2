//! Reference cases with known answers, used by `check` and by the test suite.

use crate::models::{Attendance, Role};

pub struct ReferenceCase {
    pub name: &'static str,
    pub attendance: Attendance,
    pub expected: u64,
}

fn case(name: &'static str, lesson: &[u64], pupil: &[u64], tutor: &[u64], expected: u64) -> ReferenceCase {
    ReferenceCase {
        name,
        attendance: Attendance::new()
            .with(Role::Lesson, lesson.to_vec())
            .with(Role::Pupil, pupil.to_vec())
            .with(Role::Tutor, tutor.to_vec()),
        expected,
    }
}

/// Three recorded lessons plus a few hand-made edge cases.
pub fn reference_cases() -> Vec<ReferenceCase> {
    vec![
        case(
            "recorded-1",
            &[1594663200, 1594666800],
            &[
                1594663340, 1594663389, 1594663390, 1594663395, 1594663396, 1594666472,
            ],
            &[1594663290, 1594663430, 1594663443, 1594666473],
            3117,
        ),
        case(
            "recorded-2",
            &[1594702800, 1594706400],
            &[
                1594702789, 1594704500, 1594702807, 1594704542, 1594704512, 1594704513,
                1594704564, 1594705150, 1594704581, 1594704582, 1594704734, 1594705009,
                1594705095, 1594705096, 1594705106, 1594706480, 1594705158, 1594705773,
                1594705849, 1594706480, 1594706500, 1594706875, 1594706502, 1594706503,
                1594706524, 1594706524, 1594706579, 1594706641,
            ],
            &[
                1594700035, 1594700364, 1594702749, 1594705148, 1594705149, 1594706463,
            ],
            3577,
        ),
        case(
            "recorded-3",
            &[1594692000, 1594695600],
            &[1594692033, 1594696347],
            &[1594692017, 1594692066, 1594692068, 1594696341],
            3565,
        ),
        case("full-overlap", &[0, 100], &[10, 90], &[20, 80], 60),
        case("no-overlap", &[0, 10], &[20, 30], &[40, 50], 0),
        case("tutor-absent", &[0, 100], &[10, 90], &[], 0),
        case("touching", &[0, 100], &[10, 20], &[20, 30], 0),
        case("two-windows", &[0, 100], &[10, 20, 50, 60], &[15, 55], 10),
    ]
}
