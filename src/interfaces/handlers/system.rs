use actix_web::{web, get, HttpResponse, Responder};
use humantime::format_duration;
use once_cell::sync::Lazy;
use chrono::Utc;
use std::{
    time::Duration,
    sync::{atomic::{AtomicI64, Ordering}, RwLock},
};
use sysinfo::System;
use serde::Serialize;

use crate::{
    constants::{HEALTH_CACHE_SECS, START_TIME},
    entities::{blog_post::BlogPost, project::PortfolioProject, ContentRecord},
    repositories::content_store::ContentStore,
    source::ContentSource,
    AppState,
};

#[derive(Serialize, Clone, Default)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone, Default)]
struct ResourceStatus {
    location: String,
    status: String,
    records: usize,
}

#[derive(Serialize, Clone, Default)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    memory_usage: String,
    blog: ResourceStatus,
    portfolio: ResourceStatus,
    system: SystemInfo,
}

static LAST_CHECK: AtomicI64 = AtomicI64::new(0);
static CACHED_STATUS: Lazy<RwLock<HealthCheckResponse>> = Lazy::new(||
    RwLock::new(HealthCheckResponse::default())
);

async fn probe<T, S>(source: &S, resource: &str) -> ResourceStatus
where
    T: ContentRecord,
    S: ContentSource + ?Sized,
{
    let location = source.locate(resource);
    match ContentStore::<T>::try_load(source, resource).await {
        Ok(store) => ResourceStatus { location, status: "OK".to_string(), records: store.len() },
        Err(e) => {
            tracing::warn!("Health probe failed for {}: {}", location, e);
            ResourceStatus { location, status: "Unavailable".to_string(), records: 0 }
        }
    }
}

async fn build_health_response(state: &web::Data<AppState>) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let (blog, portfolio) = futures::future::join(
        probe::<BlogPost, _>(state.source.as_ref(), &state.blog_resource),
        probe::<PortfolioProject, _>(state.source.as_ref(), &state.portfolio_resource),
    )
    .await;

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p| format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0));

    let status = if blog.status == "OK" && portfolio.status == "OK" { "healthy" } else { "degraded" };

    HealthCheckResponse {
        status: status.to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        memory_usage,
        blog,
        portfolio,
        system: system_info,
    }
}

/// Always answers 200; a failing content resource only marks the report as degraded.
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now().timestamp();
    let last = LAST_CHECK.load(Ordering::Relaxed);

    if now - last > HEALTH_CACHE_SECS {
        let response = build_health_response(&state).await;

        if let Ok(mut cache) = CACHED_STATUS.write() {
            *cache = response.clone();
            LAST_CHECK.store(now, Ordering::Relaxed);
        }

        HttpResponse::Ok().json(response)
    } else {
        match CACHED_STATUS.read() {
            Ok(response) => HttpResponse::Ok().json(response.clone()),
            Err(e) => {
                tracing::warn!("HealthCheck cache lock poisoned: {}", e);
                let response = build_health_response(&state).await;
                HttpResponse::Ok().json(response)
            }
        }
    }
}
