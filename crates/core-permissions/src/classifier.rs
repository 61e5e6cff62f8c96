//! Permission name classification
//!
//! Classification runs an ordered list of rules over immutable tables:
//! first the exact-name tables (View, Edit, Export, Manage, FullAccess),
//! then keyword checks on the lower-cased name. The first rule that matches
//! decides the group; nothing matching means [`PermissionGroup::Other`].
//!
//! Keyword precedence is fixed: a name carrying several keywords resolves by
//! check order, so `downloadView` is a `View` permission.

use crate::group::PermissionGroup;
use alloc::string::String;

const VIEW: &[&str] = &[
    "view",
    "viewNsr",
    "trsview",
    "phsview",
    "viewModels",
    "viewExceptions",
    "viewCustomModels",
    "viewProgressiveRCA",
    "viewAndExport",
    "viewMXDRSettings",
    "viewRequestList",
    "viewReportList",
    "viewReports",
    "viewPage",
    "viewCustomScript",
    "viewConnectors",
    "viewSGInventory",
    "viewSGDetail",
    "viewZTSA",
    "viewZTSARule",
    "viewIAM",
    "viewSWGCfg",
    "viewZTNACfg",
    "viewAgent",
    "viewandexecute",
    "view_data_lineage",
    "linkToDDIView",
    "view-sms-devices",
    "view-sms",
    "view-vulnerability-overview",
    "view-recommended-filters",
    "view-distribution-tasks",
    "view-distribution-tasks-status",
    "view-action-sets",
    "view-profiles",
    "view-filter-configuration-tasks-status",
    "view-vns-status",
    "view-task-status",
    "viewInventory",
    "viewDetectionLog",
    "viewPolicy",
    "viewRiskyApp",
    "viewAccountsAndApiKey",
    "viewRoles",
    "viewAlertNotifications",
    "viewFilterSearch",
    "viewConsoleSettings",
    "viewLicense",
    "viewHypersensitiveMode",
    "viewRemoteSupportSetting",
    "viewCompanyProfile",
    "viewDefaultDR",
    "viewDefaultDVASS",
    "viewSensorSettings",
    "viewProxy",
    "viewPatternSettings",
    "viewSensorPolicies",
    "viewUpdatePolicies",
    "checkVASO",
];

const EDIT: &[&str] = &[
    "edit",
    "setting",
    "modifyExceptions",
    "updateAutomatedResponseSettings",
    "updateCaseStatus",
    "saveProgressiveExecutionProfile",
    "updateRequestStatus",
    "updateMXDRSettings",
    "updateConnectors",
    "configSG",
    "modifyActivation",
    "action",
    "settings",
    "config",
    "configure",
    "modify-distribution-policy-search",
    "modify-approval-request",
    "modify-get-started",
    "modify-distribution-policy",
    "modify-filter-configuration",
    "modify-vns-install",
    "modify-vns-uninstall",
    "modify-simulations",
    "updateSSOSettings",
    "updateAccountSettings",
    "updateHypersensitiveMode",
    "updateRemoteSupportSetting",
    "updateCloudAccountSettings",
    "configNsr",
];

const EXPORT: &[&str] = &[
    "export",
    "exportResults",
    "exportSearchCreteria",
    "downloadReport",
    "downloadResults",
    "downloadReports",
    "downloadCustomScript",
    "download",
    "exportAndDownload",
    "exportEndpoints",
    "export_data_lineage",
    "downloadMetadata",
];

const MANAGE: &[&str] = &[
    "manage",
    "manageADAccount",
    "manageIAM",
    "manageAgent",
    "manageUserAndGroup",
    "managePolicy",
    "manageRiskyApp",
    "manageManagedAppsAndSettings",
    "deleteSG",
    "installSG",
    "connectDisconnectSensor",
    "connectDisconnectProducts",
    "performDeviceRemoteActions",
    "installAgent",
    "removeAgents",
    "grantPermissions",
    "enableDisableAccount",
    "enableDisable2FA",
    "assignLicense",
    "uploadMetadata",
    "uploadReport",
    "uploadIntelligenceReport",
    "createApprovalRequest",
];

const FULL_ACCESS: &[&str] = &[
    "fullAccess",
    "fullTriage",
    "execute",
    "startRemoteShell",
    "remoteShell",
    "collectFile",
    "deleteMessage",
    "isolateEndpoint",
    "quarantineRestoreMessage",
    "terminateProcess",
    "addToBlockList",
    "runScript",
    "submitToSandbox",
    "collectNetworkFile",
    "runTMIK",
    "revokeAccess",
    "isolateContainer",
    "terminateContainer",
    "malwareScan",
    "approveActions",
    "addToRestrictedGroup",
    "runOsquery",
    "runYaraRules",
    "submitObject",
    "thirdPartySweeping",
    "activate",
    "scan",
    "autoRegisterCluster",
    "overrideSensorPolicies",
    "pauseAndResumeUpdates",
    "permissionForInsurance",
    "addExceptionList",
];

/// Known permission names per group, in lookup order
pub static PERMISSION_TABLE: &[(PermissionGroup, &[&str])] = &[
    (PermissionGroup::View, VIEW),
    (PermissionGroup::Edit, EDIT),
    (PermissionGroup::Export, EXPORT),
    (PermissionGroup::Manage, MANAGE),
    (PermissionGroup::FullAccess, FULL_ACCESS),
];

/// A single classification rule
enum Rule {
    /// Name equals one of the listed literals (case-sensitive)
    Exact(&'static [&'static str]),
    /// Lower-cased name contains one of the listed keywords
    Keyword(&'static [&'static str]),
}

impl Rule {
    fn matches(&self, name: &str, lowered: &mut Option<String>) -> bool {
        match self {
            Self::Exact(names) => names.contains(&name),
            Self::Keyword(keywords) => {
                let lowered = lowered.get_or_insert_with(|| name.to_lowercase());
                keywords.iter().any(|keyword| lowered.contains(keyword))
            }
        }
    }
}

static RULES: &[(Rule, PermissionGroup)] = &[
    (Rule::Exact(VIEW), PermissionGroup::View),
    (Rule::Exact(EDIT), PermissionGroup::Edit),
    (Rule::Exact(EXPORT), PermissionGroup::Export),
    (Rule::Exact(MANAGE), PermissionGroup::Manage),
    (Rule::Exact(FULL_ACCESS), PermissionGroup::FullAccess),
    (Rule::Keyword(&["view"]), PermissionGroup::View),
    (Rule::Keyword(&["edit", "modify"]), PermissionGroup::Edit),
    (Rule::Keyword(&["download", "export"]), PermissionGroup::Export),
    (Rule::Keyword(&["manage"]), PermissionGroup::Manage),
];

/// Determine the group of a permission name
///
/// `None` classifies as [`PermissionGroup::Other`], as does any name that
/// neither appears in [`PERMISSION_TABLE`] nor carries a known keyword.
///
/// ## Example
///
/// ```
/// use core_permissions::{classify, PermissionGroup};
///
/// assert_eq!(classify(Some("viewPolicy")), PermissionGroup::View);
/// assert_eq!(classify(Some("isolateEndpoint")), PermissionGroup::FullAccess);
/// assert_eq!(classify(Some("bulkModifyTags")), PermissionGroup::Edit);
/// assert_eq!(classify(None), PermissionGroup::Other);
/// ```
#[must_use]
pub fn classify(permission: Option<&str>) -> PermissionGroup {
    let Some(name) = permission else {
        return PermissionGroup::Other;
    };

    let mut lowered = None;
    RULES
        .iter()
        .find(|(rule, _)| rule.matches(name, &mut lowered))
        .map_or(PermissionGroup::Other, |(_, group)| *group)
}
