//! University course timetabling.
//!
//! Provides roster models, a greedy slot allocator, and post-hoc
//! timetable validation. Allocation is a deterministic single pass:
//! courses are placed hardest-first into the cheapest legal slot, with
//! no backtracking, so an unplaceable course surfaces as a diagnostic
//! rather than an error.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Instructor`, `Classroom`,
//!   `Day`, `TimeSlot`, `Timetable`, `ScheduleEntry`
//! - **`allocator`**: `GreedyAllocator`, the availability predicates,
//!   slot scoring, and the per-run `AllocationSummary`
//! - **`validation`**: Conflict checks over a committed timetable
//!   (`validate`, `ValidationReport`)
//!
//! # Pipeline
//!
//! Load a roster, run [`allocator::GreedyAllocator::allocate`], then run
//! [`validation::validate`] over the outcome. The validator reads the
//! committed grid only, so it also catches timetables edited after
//! allocation.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod allocator;
pub mod models;
pub mod validation;
