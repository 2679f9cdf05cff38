use crate::domain::model::{HttpMethod, QueryParams};

pub const EXERCISE_LANGUAGE: u32 = 2;
pub const EXERCISE_PAGE_SIZE: u32 = 20;

/// Every endpoint the client knows how to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Exercises { offset: u32 },
    ExerciseInfo(u64),
    ExerciseCategories,
    Routines,
    RoutineDetail(u64),
    RoutineStructure(u64),
    /// `POST /{type}/`. The type is placed in the path as given.
    Collection(String),
    Slot,
    SlotEntry,
}

impl Route {
    pub fn method(&self) -> HttpMethod {
        match self {
            Route::Exercises { .. }
            | Route::ExerciseInfo(_)
            | Route::ExerciseCategories
            | Route::Routines
            | Route::RoutineDetail(_)
            | Route::RoutineStructure(_) => HttpMethod::Get,
            Route::Collection(_) | Route::Slot | Route::SlotEntry => HttpMethod::Post,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Exercises { offset } => format!(
                "/exercise/?language={}&limit={}&offset={}",
                EXERCISE_LANGUAGE, EXERCISE_PAGE_SIZE, offset
            ),
            Route::ExerciseInfo(id) => format!("/exerciseinfo/{}/", id),
            Route::ExerciseCategories => "/exercisecategory/".to_string(),
            Route::Routines => "/routine/".to_string(),
            Route::RoutineDetail(id) => format!("/routine/{}/", id),
            Route::RoutineStructure(id) => format!("/routine/{}/structure/", id),
            Route::Collection(kind) => format!("/{}/", kind),
            Route::Slot => "/slot/".to_string(),
            Route::SlotEntry => "/slot-entry/".to_string(),
        }
    }

    /// Query pairs that always accompany the route, ahead of caller filters.
    pub fn default_query(&self) -> QueryParams {
        match self {
            Route::Routines => vec![
                ("is_public".to_string(), "false".to_string()),
                ("is_template".to_string(), "false".to_string()),
            ],
            _ => Vec::new(),
        }
    }
}
