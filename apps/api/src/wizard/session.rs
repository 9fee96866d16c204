use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::wizard::controller::{Step, WizardController, STEPS};

/// One live wizard session: a controller plus the flag that stands in for the
/// UI's disabled-while-pending assist button. No cancellation, no queueing.
#[derive(Debug)]
pub struct WizardSession {
    pub id: Uuid,
    pub wizard: WizardController,
    pub assist_pending: bool,
    pub created_at: DateTime<Utc>,
}

impl WizardSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            wizard: WizardController::default(),
            assist_pending: false,
            created_at: Utc::now(),
        }
    }
}

/// What handlers return after any mutation: the whole wizard state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub step_index: usize,
    pub step: &'static Step,
    pub total_steps: usize,
    pub progress: f64,
    pub record: ResumeRecord,
    pub created_at: DateTime<Utc>,
}

impl SessionSnapshot {
    fn of(session: &WizardSession) -> Self {
        Self {
            id: session.id,
            step_index: session.wizard.current_step(),
            step: session.wizard.step(),
            total_steps: STEPS.len(),
            progress: session.wizard.progress(),
            record: session.wizard.record.clone(),
            created_at: session.created_at,
        }
    }
}

/// In-memory session store. Records live exactly as long as their session;
/// there is no persistence layer.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
}

impl SessionStore {
    pub async fn create(&self) -> SessionSnapshot {
        let session = WizardSession::new();
        let snapshot = SessionSnapshot::of(&session);
        self.sessions.write().await.insert(session.id, session);
        snapshot
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<SessionSnapshot, AppError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        Ok(SessionSnapshot::of(session))
    }

    /// Runs a synchronous mutation against the session and returns the
    /// resulting snapshot. Every form callback goes through here.
    pub async fn mutate<F>(&self, id: Uuid, f: F) -> Result<SessionSnapshot, AppError>
    where
        F: FnOnce(&mut WizardSession) -> Result<(), AppError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        f(session)?;
        Ok(SessionSnapshot::of(session))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Marks the session's assist call as in flight and returns a record
    /// snapshot for prompt building. A second call while one is pending is
    /// rejected, mirroring the disabled trigger control.
    pub async fn begin_assist(&self, id: Uuid) -> Result<ResumeRecord, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        if session.assist_pending {
            return Err(AppError::AssistPending);
        }
        session.assist_pending = true;
        Ok(session.wizard.record.clone())
    }

    /// Clears the pending flag. Must be called once the assist call settles,
    /// success or failure. Tolerates a session deleted mid-call.
    pub async fn finish_assist(&self, id: Uuid) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.assist_pending = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_snapshot() {
        let store = SessionStore::default();
        let created = store.create().await;
        let snapshot = store.snapshot(created.id).await.unwrap();
        assert_eq!(snapshot.step_index, 0);
        assert_eq!(snapshot.step.id, "type");
        assert_eq!(snapshot.total_steps, STEPS.len());
    }

    #[tokio::test]
    async fn test_snapshot_unknown_session_is_not_found() {
        let store = SessionStore::default();
        let err = store.snapshot(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mutate_advances_step() {
        let store = SessionStore::default();
        let created = store.create().await;
        let snapshot = store
            .mutate(created.id, |s| {
                s.wizard.advance();
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(snapshot.step_index, 1);
    }

    #[tokio::test]
    async fn test_second_assist_rejected_while_pending() {
        let store = SessionStore::default();
        let created = store.create().await;
        store.begin_assist(created.id).await.unwrap();
        let err = store.begin_assist(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::AssistPending));

        store.finish_assist(created.id).await;
        assert!(store.begin_assist(created.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_discards_record() {
        let store = SessionStore::default();
        let created = store.create().await;
        store.remove(created.id).await.unwrap();
        assert!(store.snapshot(created.id).await.is_err());
        assert!(matches!(
            store.remove(created.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
