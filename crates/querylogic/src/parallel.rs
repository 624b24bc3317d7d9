//! Best-effort parallelization of independent tasks.
//!
//! A structured task group: all submitted tasks are awaited, results come
//! back in submission order, and the first failure surfaces only after
//! every task has settled. Zero or one task runs inline without spawning.
//! Tasks must not share mutable state; no synchronization is provided here.

use std::future::Future;

use tokio::task::JoinSet;

use crate::error::{QueryError, Result};

/// Run independent tasks concurrently and collect their results in
/// submission order.
///
/// A task panic is reported as a task error, after the remaining tasks have
/// been allowed to finish.
pub async fn try_parallelize<T, F>(mut tasks: Vec<F>) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    if tasks.len() <= 1 {
        return match tasks.pop() {
            None => Ok(Vec::new()),
            Some(task) => Ok(vec![task.await?]),
        };
    }

    let count = tasks.len();
    let mut set = JoinSet::new();
    for (index, task) in tasks.into_iter().enumerate() {
        set.spawn(async move { (index, task.await) });
    }

    let mut results: Vec<Option<T>> = std::iter::repeat_with(|| None).take(count).collect();
    let mut first_error: Option<QueryError> = None;
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, Ok(value))) => results[index] = Some(value),
            Ok((_, Err(err))) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
            Err(join_error) => {
                if first_error.is_none() {
                    first_error = Some(QueryError::task(join_error.to_string()));
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(results.into_iter().flatten().collect()),
    }
}
