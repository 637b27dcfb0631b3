/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally. It is built
/// once in `main` and every request shares it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portfolio_db::DbPool,
}
