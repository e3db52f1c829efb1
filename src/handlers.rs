use crate::errors::AppError;
use crate::grid;
use crate::models::{
    CreateHabitRequest, DayRequest, DeleteHabitRequest, Habit, HabitResponse, HabitsResponse,
    RenameHabitRequest, ReorderRequest,
};
use crate::state::AppState;
use crate::store::HabitStore;
use crate::streaks::streaks_at;
use crate::ui::{render_habits, GridCell, HabitView};
use crate::window::DateWindow;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let window = DateWindow::ending_at(today);
    let months = window.month_offsets();

    let store = state.store.lock().await;
    let views: Vec<HabitView> = store
        .habits()
        .iter()
        .map(|habit| {
            let states = grid::present(&window, &habit.completions, today);
            let cells = window
                .days()
                .iter()
                .zip(&states)
                .map(|(&day, &state)| GridCell { day, state })
                .rev()
                .collect();
            HabitView {
                id: habit.id,
                name: habit.name.clone(),
                stats: streaks_at(today, &habit.completions),
                months: months.clone(),
                cells,
            }
        })
        .collect();

    Html(render_habits(&views))
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<HabitsResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(to_listing(today(), &store)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store.create(payload.name);
    Ok(Json(to_response(today(), &habit)))
}

pub async fn rename_habit(
    State(state): State<AppState>,
    Json(payload): Json<RenameHabitRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store.rename(payload.id, &payload.name)?;
    Ok(Json(to_response(today(), habit)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Json(payload): Json<DeleteHabitRequest>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    store.delete(payload.id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn log_day(
    State(state): State<AppState>,
    Json(payload): Json<DayRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store.log_day(payload.id, payload.day)?;
    Ok(Json(to_response(today(), habit)))
}

pub async fn unlog_day(
    State(state): State<AppState>,
    Json(payload): Json<DayRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store.unlog_day(payload.id, payload.day)?;
    Ok(Json(to_response(today(), habit)))
}

pub async fn reorder(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<HabitsResponse>, AppError> {
    let mut store = state.store.lock().await;
    store.reorder(&payload.order)?;
    Ok(Json(to_listing(today(), &store)))
}

fn to_listing(today: NaiveDate, store: &HabitStore) -> HabitsResponse {
    HabitsResponse {
        habits: store
            .habits()
            .iter()
            .map(|habit| to_response(today, habit))
            .collect(),
    }
}

fn to_response(today: NaiveDate, habit: &Habit) -> HabitResponse {
    let stats = streaks_at(today, &habit.completions);
    HabitResponse {
        id: habit.id,
        name: habit.name.clone(),
        completions: habit.completions.iter().collect(),
        current_streak: stats.current,
        longest_streak: stats.longest,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
