//! CPU workload endpoints
//!
//! Each handler resolves its parameters against the configured limits, runs
//! the engine on the compute pool with a freshly OS-seeded RNG, and wraps
//! the report in the standard envelope.

use axum::extract::State;
use rand::rngs::StdRng;
use rand::SeedableRng;
use strain_core::{
    prime_report, recursive_report, run_matrix_pipeline, sort_variants, MatrixReport,
    ParallelReport, PrimeMode, PrimeReport, RecursiveReport, SortReport, WorkloadError,
};
use strain_web::{ApiResponse, RequestId, StrictQuery};
use tracing::debug;

use crate::{
    context::AppContext,
    errors::{RestError, RestResult},
    metrics::Workload,
    models::{MatrixQuery, ParallelQuery, PrimesQuery, RecursiveQuery, SortQuery},
};

fn to_usize(name: &'static str, value: u64) -> Result<usize, WorkloadError> {
    usize::try_from(value)
        .map_err(|_| WorkloadError::invalid_parameter(name, format!("{value} does not fit in usize")))
}

/// `GET /cpu/primes?limit=`: sieve plus trial-division verification
pub async fn primes(
    State(ctx): State<AppContext>,
    request_id: RequestId,
    StrictQuery(query): StrictQuery<PrimesQuery>,
) -> RestResult<ApiResponse<PrimeReport>> {
    let limit = to_usize("limit", query.resolve(&ctx.limits.primes))?;
    debug!(limit, "Dispatching prime workload");

    let report = ctx
        .measure(
            Workload::Primes,
            ctx.pool
                .run("primes", move || prime_report(limit, PrimeMode::Verified)),
        )
        .await?;

    Ok(ApiResponse::new(report, &request_id))
}

/// `GET /cpu/sort?size=`: quick, bubble and merge sort over one array
pub async fn sort(
    State(ctx): State<AppContext>,
    request_id: RequestId,
    StrictQuery(query): StrictQuery<SortQuery>,
) -> RestResult<ApiResponse<SortReport>> {
    let size = to_usize("size", query.resolve(&ctx.limits.sort))?;
    debug!(size, "Dispatching sort workload");

    let report = ctx
        .measure(
            Workload::Sort,
            ctx.pool.run("sort", move || {
                let mut rng = StdRng::from_os_rng();
                sort_variants(size, &mut rng)
            }),
        )
        .await?;

    Ok(ApiResponse::new(report, &request_id))
}

/// `GET /cpu/matrix?size=`: multiply, transpose and determinant pipeline
pub async fn matrix(
    State(ctx): State<AppContext>,
    request_id: RequestId,
    StrictQuery(query): StrictQuery<MatrixQuery>,
) -> RestResult<ApiResponse<MatrixReport>> {
    let size = to_usize("size", query.resolve(&ctx.limits.matrix))?;
    let determinant_max_size = to_usize(
        "determinant_max_size",
        ctx.limits.matrix.determinant_max_size,
    )?;
    debug!(size, determinant_max_size, "Dispatching matrix workload");

    let report = ctx
        .measure(Workload::Matrix, async {
            let pipeline = ctx
                .pool
                .run("matrix", move || {
                    let mut rng = StdRng::from_os_rng();
                    run_matrix_pipeline(size, determinant_max_size, &mut rng)
                })
                .await?;
            Ok::<_, RestError>(pipeline?)
        })
        .await?;

    Ok(ApiResponse::new(report, &request_id))
}

/// `GET /cpu/recursive?depth=`: perturbed naive Fibonacci
pub async fn recursive(
    State(ctx): State<AppContext>,
    request_id: RequestId,
    StrictQuery(query): StrictQuery<RecursiveQuery>,
) -> RestResult<ApiResponse<RecursiveReport>> {
    let depth = query.resolve(&ctx.limits.recursive);
    let depth = i64::try_from(depth)
        .map_err(|_| WorkloadError::invalid_parameter("depth", format!("{depth} is too large")))?;
    debug!(depth, "Dispatching recursive workload");

    let report = ctx
        .measure(
            Workload::Recursive,
            ctx.pool.run("recursive", move || recursive_report(depth)),
        )
        .await?;

    Ok(ApiResponse::new(report, &request_id))
}

/// `GET /cpu/parallel?iterations=&threads=`: partitioned fork-join
pub async fn parallel(
    State(ctx): State<AppContext>,
    request_id: RequestId,
    StrictQuery(query): StrictQuery<ParallelQuery>,
) -> RestResult<ApiResponse<ParallelReport>> {
    let (iterations, threads) = query.resolve(&ctx.limits.parallel);
    let threads = to_usize("threads", threads)?;
    debug!(iterations, threads, "Dispatching parallel workload");

    let report = ctx
        .measure(
            Workload::Parallel,
            ctx.pool.parallel_report(iterations, threads),
        )
        .await?;

    Ok(ApiResponse::new(report, &request_id))
}
