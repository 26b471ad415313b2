use crate::editor::EditSession;
use crate::errors::Result;
use crate::fetch::ProfileSource;
use crate::profile::{Profile, ProfileId};

/// In-memory model of the directory collection.
///
/// Owns the authoritative ordered list of profiles, the loading flag
/// and the current edit session, if any. All mutations are synchronous
/// and single-threaded; every id-addressed operation is a silent no-op
/// when the id is absent, which keeps the model robust against stale
/// references (e.g. a deletion racing an open edit session).
pub struct DirectoryState {
    profiles: Vec<Profile>,
    loading: bool,
    editing: Option<EditSession>,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryState {
    /// Initial state: empty collection, loading until the first
    /// `load_from` settles.
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            loading: true,
            editing: None,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.editing.as_mut()
    }

    /// Replace the collection wholesale from a source.
    ///
    /// On failure the collection is left exactly as it was and the
    /// error is handed back to the caller for a user-visible,
    /// non-fatal notification; no automatic retry. The loading flag
    /// is reset on both paths. Repeated loads are last-write-wins:
    /// each completed call replaces the collection again.
    pub fn load_from(&mut self, source: &impl ProfileSource) -> Result<()> {
        self.loading = true;

        match source.load() {
            Ok(profiles) => {
                log::info!("Loaded {} profiles", profiles.len());
                self.profiles = profiles;
                self.loading = false;
                Ok(())
            }
            Err(err) => {
                log::warn!("Profile load failed: {err}");
                self.loading = false;
                Err(err)
            }
        }
    }

    fn position(&self, id: ProfileId) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }

    /// Flip the `liked` flag of one record. Order is untouched.
    pub fn toggle_like(&mut self, id: ProfileId) {
        if let Some(profile) = self.profiles.iter_mut().find(|p| p.id == id) {
            profile.liked = !profile.liked;
            log::debug!("Profile {} liked: {}", id, profile.liked);
        }
    }

    /// Open an edit session snapshotting the record's current values.
    ///
    /// Replaces any session already open. No-op if the id is absent.
    pub fn begin_edit(&mut self, id: ProfileId) -> Option<&EditSession> {
        let session = self
            .profiles
            .iter()
            .find(|p| p.id == id)
            .map(EditSession::new)?;
        self.editing = Some(session);
        self.editing.as_ref()
    }

    /// Replace the record matching `updated.id` in place.
    ///
    /// The session operates on a snapshot, so the target may have been
    /// deleted while the editor was open; in that case nothing is
    /// replaced. The editing session is closed either way.
    pub fn commit_edit(&mut self, updated: Profile) {
        match self.position(updated.id) {
            Some(index) => {
                log::debug!("Profile {} updated", updated.id);
                self.profiles[index] = updated;
            }
            None => {
                log::debug!("Stale edit for profile {} dropped", updated.id);
            }
        }
        self.editing = None;
    }

    /// Discard the edit session without touching the collection.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Look up a record and produce a confirmation capability for it.
    ///
    /// Mutates nothing; the deletion happens only when the returned
    /// request is confirmed. `None` when the id is absent.
    pub fn request_delete(&self, id: ProfileId) -> Option<DeleteRequest> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .map(|p| DeleteRequest {
                id: p.id,
                name: p.name.clone(),
            })
    }

    /// Remove the matching record, preserving the order of the rest.
    /// Idempotent: confirming an already-removed id is a no-op.
    pub fn confirm_delete(&mut self, id: ProfileId) {
        if let Some(index) = self.position(id) {
            let removed = self.profiles.remove(index);
            log::info!("Profile {} ({}) deleted", removed.id, removed.name);
        }
    }
}

/// Single-shot capability handed to the confirmation dialog.
///
/// Carries what the prompt needs; the collection is only touched when
/// `confirm` is called. Dropping the request is a dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    id: ProfileId,
    name: String,
}

impl DeleteRequest {
    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete {}? This action cannot be undone.",
            self.name
        )
    }

    pub fn confirm(self, state: &mut DirectoryState) {
        state.confirm_delete(self.id);
    }
}
