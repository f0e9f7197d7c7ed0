//! Packing workflow
//!
//! Device lifecycle within a job is `pending` → `packed`, driven by scans
//! or by a forced finish. Finishing a job with pending devices is a two-step
//! protocol: a preview returns the missing items without touching state,
//! and a forced call packs everything that is left.

mod scan;

pub use scan::resolve_device_id;

use shared::models::{DeviceEventType, NewDeviceEvent, PackStatus};
use shared::packing::{FinishPackResponse, ScanBoard, ScanRequest, ScanResponse};
use sqlx::SqlitePool;

use crate::auth::RequestContext;
use crate::db::repository::{device, job, job_device};
use crate::services::event_log;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone)]
pub struct PackingService {
    pool: SqlitePool,
}

impl PackingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Job header plus devices ordered by product name, then device id
    pub async fn scan_board(&self, job_id: i64) -> AppResult<ScanBoard> {
        let job = job::find_by_id(&self.pool, job_id)
            .await?
            .ok_or_else(|| AppError::job_not_found(job_id))?;
        let devices = job_device::find_board_items(&self.pool, job_id).await?;

        Ok(ScanBoard {
            job_id: job.id,
            description: job.description,
            devices,
        })
    }

    /// Mark one device as packed. Re-scanning a packed device re-stamps it.
    pub async fn scan_device(
        &self,
        ctx: &RequestContext,
        job_id: i64,
        req: &ScanRequest,
    ) -> AppResult<ScanResponse> {
        let device_id = resolve_device_id(req).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ScanIdentifierMissing,
                "deviceID or barcodePayload is required",
            )
        })?;

        if !job::exists(&self.pool, job_id).await? {
            return Err(AppError::job_not_found(job_id));
        }

        let now = shared::util::now_millis();
        let updated =
            job_device::set_pack_status(&self.pool, job_id, &device_id, PackStatus::Packed, now)
                .await?;
        if !updated {
            if device::exists(&self.pool, &device_id).await? {
                tracing::info!(job_id, device_id = %device_id, "Scanned device not assigned to job");
                return Err(AppError::not_assigned(job_id, &device_id));
            }
            return Err(AppError::device_not_found(&device_id));
        }

        tracing::info!(job_id, device_id = %device_id, "Device packed");
        event_log::record(
            &self.pool,
            NewDeviceEvent::device(job_id, device_id.as_str(), DeviceEventType::Scanned, ctx.actor()),
        )
        .await;

        Ok(ScanResponse {
            success: true,
            message: format!("Device {device_id} packed"),
            device_id,
        })
    }

    /// Complete packing of a job
    ///
    /// Without `force`, pending devices turn the call into a preview that
    /// lists them (`"<product> (<device>)"`, board order) and mutates nothing.
    pub async fn finish_pack(
        &self,
        ctx: &RequestContext,
        job_id: i64,
        force: bool,
    ) -> AppResult<FinishPackResponse> {
        if !job::exists(&self.pool, job_id).await? {
            return Err(AppError::job_not_found(job_id));
        }

        let pending = job_device::find_pending(&self.pool, job_id).await?;

        let message = if pending.is_empty() {
            "All devices packed".to_string()
        } else if !force {
            let missing_items: Vec<String> = pending.iter().map(|i| i.missing_label()).collect();
            tracing::info!(job_id, missing = missing_items.len(), "Finish requested with missing devices");
            return Ok(FinishPackResponse {
                success: false,
                message: format!("{} device(s) not packed yet", missing_items.len()),
                missing_items,
            });
        } else {
            let now = shared::util::now_millis();
            let packed = job_device::pack_all_pending(&self.pool, job_id, now).await?;
            tracing::warn!(job_id, packed, "Packing force-completed with missing devices");
            format!("Packing completed, {packed} device(s) marked packed without scan")
        };

        event_log::record(
            &self.pool,
            NewDeviceEvent::job(job_id, DeviceEventType::PackCompleted, ctx.actor()),
        )
        .await;

        Ok(FinishPackResponse {
            success: true,
            missing_items: Vec::new(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{device_event, test_support::*};

    async fn setup() -> (PackingService, SqlitePool, i64) {
        let pool = pool().await;
        seed_product(&pool, 1, "Beta Light").await;
        seed_product(&pool, 2, "Alpha Cam").await;
        seed_device(&pool, "B-1", 1).await;
        seed_device(&pool, "A-2", 2).await;
        seed_device(&pool, "A-1", 2).await;
        seed_device(&pool, "FREE", 1).await;
        let job_id = seed_job(&pool).await;
        for id in ["B-1", "A-2", "A-1"] {
            job_device::assign(&pool, job_id, id).await.unwrap();
        }
        (PackingService::new(pool.clone()), pool, job_id)
    }

    fn scan(id: &str) -> ScanRequest {
        ScanRequest {
            device_id: Some(id.into()),
            barcode_payload: None,
        }
    }

    async fn pack_ts(pool: &SqlitePool, job_id: i64, device_id: &str) -> Option<i64> {
        sqlx::query_scalar("SELECT pack_ts FROM job_device WHERE job_id = ? AND device_id = ?")
            .bind(job_id)
            .bind(device_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_scan_board_order() {
        let (svc, _, job_id) = setup().await;
        let board = svc.scan_board(job_id).await.unwrap();
        assert_eq!(board.description.as_deref(), Some("Festival stage"));
        let ids: Vec<_> = board.devices.iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(ids, vec!["A-1", "A-2", "B-1"]);

        let err = svc.scan_board(job_id + 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::JobNotFound);
    }

    #[tokio::test]
    async fn test_rescan_is_idempotent() {
        let (svc, pool, job_id) = setup().await;
        let ctx = RequestContext::new(Some("packer".into()));

        let resp = svc.scan_device(&ctx, job_id, &scan("A-1")).await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.device_id, "A-1");
        let first = pack_ts(&pool, job_id, "A-1").await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        svc.scan_device(&ctx, job_id, &scan("A-1")).await.unwrap();
        let second = pack_ts(&pool, job_id, "A-1").await.unwrap();
        assert!(second >= first);

        let events = device_event::find_by_job(&pool, job_id).await.unwrap();
        assert_eq!(events.iter().filter(|e| e.event_type == "scanned").count(), 2);
        assert!(events.iter().all(|e| e.actor.as_deref() == Some("packer")));
    }

    #[tokio::test]
    async fn test_scan_errors() {
        let (svc, _, job_id) = setup().await;
        let ctx = RequestContext::anonymous();

        let err = svc
            .scan_device(&ctx, job_id, &ScanRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ScanIdentifierMissing);

        let err = svc.scan_device(&ctx, job_id, &scan("FREE")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DeviceNotAssigned);

        let err = svc.scan_device(&ctx, job_id, &scan("GHOST")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DeviceNotFound);

        let err = svc.scan_device(&ctx, job_id + 9, &scan("A-1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::JobNotFound);
    }

    #[tokio::test]
    async fn test_finish_gate_then_force() {
        let (svc, pool, job_id) = setup().await;
        let ctx = RequestContext::anonymous();
        svc.scan_device(&ctx, job_id, &scan("A-2")).await.unwrap();

        let preview = svc.finish_pack(&ctx, job_id, false).await.unwrap();
        assert!(!preview.success);
        assert_eq!(
            preview.missing_items,
            vec!["Alpha Cam (A-1)".to_string(), "Beta Light (B-1)".to_string()]
        );
        // Preview leaves state untouched
        assert_eq!(job_device::find_pending(&pool, job_id).await.unwrap().len(), 2);

        let forced = svc.finish_pack(&ctx, job_id, true).await.unwrap();
        assert!(forced.success);
        assert!(forced.missing_items.is_empty());
        assert!(job_device::find_pending(&pool, job_id).await.unwrap().is_empty());

        let events = device_event::find_by_job(&pool, job_id).await.unwrap();
        let completed: Vec<_> = events
            .iter()
            .filter(|e| e.event_type == "pack_completed")
            .collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].device_id, "");

        let after = svc.finish_pack(&ctx, job_id, false).await.unwrap();
        assert!(after.success);
        assert!(after.missing_items.is_empty());
    }

    #[tokio::test]
    async fn test_transitions_survive_event_log_failure() {
        let (svc, pool, job_id) = setup().await;
        let ctx = RequestContext::new(Some("packer".into()));
        sqlx::query("DROP TABLE device_event")
            .execute(&pool)
            .await
            .unwrap();

        let resp = svc.scan_device(&ctx, job_id, &scan("A-1")).await.unwrap();
        assert!(resp.success);
        assert_eq!(job_device::find_pending(&pool, job_id).await.unwrap().len(), 2);

        let forced = svc.finish_pack(&ctx, job_id, true).await.unwrap();
        assert!(forced.success);
        assert!(job_device::find_pending(&pool, job_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_finish_when_everything_packed() {
        let (svc, _, job_id) = setup().await;
        let ctx = RequestContext::anonymous();
        for id in ["A-1", "A-2", "B-1"] {
            svc.scan_device(&ctx, job_id, &scan(id)).await.unwrap();
        }

        for force in [false, true] {
            let resp = svc.finish_pack(&ctx, job_id, force).await.unwrap();
            assert!(resp.success);
            assert!(resp.missing_items.is_empty());
        }
    }
}
