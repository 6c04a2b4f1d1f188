use crate::models::AuthMeta;
use serde::{Deserialize, Serialize};

/// Flags forwarded to the photo processor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProcessFlags {
    pub scan: bool,
    pub retag: bool,
    pub clean_db: bool,
}

impl ProcessFlags {
    /// Retagging and database cleanup are administrative
    pub fn requires_admin(&self) -> bool {
        self.retag || self.clean_db
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("scan", self.scan.to_string()),
            ("retag", self.retag.to_string()),
            ("clean_db", self.clean_db.to_string()),
        ]
    }
}

/// Processing buttons of the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessAction {
    Scan,
    FullRescan,
    Retag,
    CleanDb,
}

impl ProcessAction {
    pub fn flags(&self) -> ProcessFlags {
        match self {
            ProcessAction::Scan => ProcessFlags {
                scan: true,
                ..ProcessFlags::default()
            },
            ProcessAction::FullRescan => ProcessFlags {
                scan: true,
                retag: true,
                ..ProcessFlags::default()
            },
            ProcessAction::Retag => ProcessFlags {
                retag: true,
                ..ProcessFlags::default()
            },
            ProcessAction::CleanDb => ProcessFlags {
                clean_db: true,
                ..ProcessFlags::default()
            },
        }
    }

    /// i18n key of the button label
    pub fn label_key(&self) -> &'static str {
        match self {
            ProcessAction::Scan => "action-scan",
            ProcessAction::FullRescan => "action-full-rescan",
            ProcessAction::Retag => "action-retag",
            ProcessAction::CleanDb => "action-clean-db",
        }
    }

    pub fn all() -> &'static [ProcessAction] {
        static ALL: [ProcessAction; 4] = [
            ProcessAction::Scan,
            ProcessAction::FullRescan,
            ProcessAction::Retag,
            ProcessAction::CleanDb,
        ];
        &ALL
    }

    /// Whether the user described by `auth` may trigger this action
    pub fn is_allowed(&self, auth: &AuthMeta) -> bool {
        !self.flags().requires_admin() || auth.user_is_admin
    }

    /// Calls `handler` with the action's flags if the user may trigger it
    ///
    /// Returns whether the handler was called.
    pub fn dispatch(&self, auth: &AuthMeta, handler: impl FnOnce(ProcessFlags)) -> bool {
        if !self.is_allowed(auth) {
            log::warn!("Ignoring {:?}: administrator rights required", self);
            return false;
        }
        handler(self.flags());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(action: ProcessAction, auth: AuthMeta) -> Vec<ProcessFlags> {
        let mut calls = Vec::new();
        action.dispatch(&auth, |flags| calls.push(flags));
        calls
    }

    #[test]
    fn test_scan_flags_exact() {
        assert_eq!(
            collect(ProcessAction::Scan, AuthMeta::default()),
            vec![ProcessFlags {
                scan: true,
                retag: false,
                clean_db: false
            }]
        );
    }

    #[test]
    fn test_admin_actions_blocked_for_non_admin() {
        for action in [
            ProcessAction::Retag,
            ProcessAction::CleanDb,
            ProcessAction::FullRescan,
        ] {
            assert!(collect(action, AuthMeta::default()).is_empty());
            assert!(!action.is_allowed(&AuthMeta::default()));
        }
    }

    #[test]
    fn test_admin_actions_allowed_for_admin() {
        assert_eq!(
            collect(ProcessAction::Retag, AuthMeta::admin()),
            vec![ProcessFlags {
                scan: false,
                retag: true,
                clean_db: false
            }]
        );
        assert_eq!(
            collect(ProcessAction::CleanDb, AuthMeta::admin()),
            vec![ProcessFlags {
                scan: false,
                retag: false,
                clean_db: true
            }]
        );
    }

    #[test]
    fn test_to_params() {
        assert_eq!(
            ProcessAction::FullRescan.flags().to_params(),
            vec![
                ("scan", "true".to_string()),
                ("retag", "true".to_string()),
                ("clean_db", "false".to_string()),
            ]
        );
    }
}
