use crate::types::TablePage;
use crate::utils::to_js;
use app_utils::session::SessionPayload;
use core_permissions::{
    by_feature, by_group, by_role, by_role_feature, discover_keys, export_csv, group_members,
    group_series, overview, paginate, property_distribution, property_groups, property_series,
    property_value_counts, role_group_counts, search, summarize, top_permissions, unique_roles,
    AnalysisConfig, AnalysisError, Dataset, PermissionGroup, PermissionRecord, RoleFilter,
};
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

/// Session object owning one uploaded permissions export.
///
/// Holds the full dataset, the current role filter and the report limits.
/// Every report is recomputed from the filtered rows on each call; nothing
/// is cached between calls.
#[wasm_bindgen]
pub struct PermissionExplorer {
    dataset: Dataset,
    /// Rows selected by `filter`
    view: Dataset,
    filter: RoleFilter,
    config: AnalysisConfig,
}

#[wasm_bindgen]
impl PermissionExplorer {
    // ========================================
    // SESSION
    // ========================================

    /// Loads a session payload `{data, meta}` as produced by the upload layer
    #[wasm_bindgen(constructor)]
    pub fn new(payload: JsValue) -> Result<PermissionExplorer, JsValue> {
        let payload: SessionPayload = serde_wasm_bindgen::from_value(payload)
            .map_err(|e| JsValue::from_str(&format!("Invalid session payload: {}", e)))?;

        let dataset = payload
            .into_dataset()
            .map_err(|e| JsValue::from_str(&format!("Failed to load dataset: {}", e)))?;

        Self::from_dataset(dataset, AnalysisConfig::default())
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))
    }

    /// Loads a session payload from its JSON text
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<PermissionExplorer, JsValue> {
        let dataset = app_utils::parse_session(json)
            .map_err(|e| JsValue::from_str(&format!("Failed to load dataset: {}", e)))?;

        Self::from_dataset(dataset, AnalysisConfig::default())
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))
    }

    /// Replaces the report limits; omitted fields take their defaults
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: AnalysisConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))?;

        self.config = config;
        Ok(())
    }

    /// Column headers in file order
    #[wasm_bindgen]
    pub fn headers(&self) -> Result<JsValue, JsValue> {
        to_js(self.dataset.headers())
    }

    /// Rows currently selected by the role filter
    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.view.row_count()
    }

    /// Whether the role, feature and permission reports apply
    #[wasm_bindgen(js_name = hasPermissionColumns)]
    pub fn has_permission_columns(&self) -> bool {
        self.dataset.has_permission_columns()
    }

    /// Every role of the upload, regardless of the current filter
    #[wasm_bindgen]
    pub fn roles(&self) -> Result<JsValue, JsValue> {
        to_js(&unique_roles(&self.dataset.records()))
    }

    /// Selects one role, or every role with `"all"`
    #[wasm_bindgen(js_name = setRoleFilter)]
    pub fn set_role_filter(&mut self, role: &str) {
        self.apply_filter(RoleFilter::parse(role));
    }

    // ========================================
    // PERMISSION REPORTS
    // ========================================

    /// Distinct roles, features and permissions plus the entry count
    #[wasm_bindgen]
    pub fn overview(&self) -> Result<JsValue, JsValue> {
        to_js(&overview(&self.view.records()))
    }

    /// `[{name, value}]` enabled permissions per non-empty group
    #[wasm_bindgen(js_name = groupSeries)]
    pub fn group_series(&self) -> Result<JsValue, JsValue> {
        to_js(&group_series(&by_group(&self.view.records())))
    }

    /// `{View, Edit, ...}` enabled permissions per group, zeros included
    #[wasm_bindgen(js_name = groupTotals)]
    pub fn group_totals(&self) -> Result<JsValue, JsValue> {
        to_js(&by_group(&self.view.records()))
    }

    /// `[{name, View, Edit, ...}]` per role
    #[wasm_bindgen(js_name = byRole)]
    pub fn by_role(&self) -> Result<JsValue, JsValue> {
        to_js(&by_role(&self.view.records()))
    }

    /// `[{name, View, Edit, ...}]` per feature
    #[wasm_bindgen(js_name = byFeature)]
    pub fn by_feature(&self) -> Result<JsValue, JsValue> {
        to_js(&by_feature(&self.view.records()))
    }

    /// `[{name, value}]` group series of a single role
    #[wasm_bindgen(js_name = roleGroupSeries)]
    pub fn role_group_series(&self, role: &str) -> Result<JsValue, JsValue> {
        to_js(&group_series(&role_group_counts(&self.view.records(), role)))
    }

    /// `[{name, role, feature, View, Edit, ...}]` role x feature matrix
    #[wasm_bindgen(js_name = roleFeatureMatrix)]
    pub fn role_feature_matrix(&self) -> Result<JsValue, JsValue> {
        let records = self.view.records();
        to_js(&by_role_feature(&records, self.config.role_feature_limit))
    }

    /// `[{name, group, enabled, disabled}]` most enabled permissions
    #[wasm_bindgen(js_name = topPermissions)]
    pub fn top_permissions(&self, n: Option<u32>) -> Result<JsValue, JsValue> {
        let n = n.map_or(self.config.top_permissions, |n| n as usize);
        to_js(&top_permissions(&self.view.records(), n))
    }

    /// Enabled records of `role` whose permission is in `group`
    #[wasm_bindgen(js_name = groupMembers)]
    pub fn group_members(&self, role: &str, group: &str) -> Result<JsValue, JsValue> {
        let group = PermissionGroup::from_name(group)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown permission group: {}", group)))?;

        let records = self.view.records();
        to_js(&group_members(&records, role, group))
    }

    // ========================================
    // PROPERTY BAGS AND SUMMARIES
    // ========================================

    /// Property keys found in the sampled rows of a column
    #[wasm_bindgen(js_name = propertyKeys)]
    pub fn property_keys(&self, header: &str) -> Result<JsValue, JsValue> {
        to_js(&discover_keys(
            self.view.rows(),
            header,
            self.config.property_sample_size,
        ))
    }

    /// `[{value, count}]` top values of one property key in a column
    #[wasm_bindgen(js_name = propertyDistribution)]
    pub fn property_distribution(&self, header: &str, key: &str) -> Result<JsValue, JsValue> {
        to_js(&property_distribution(
            self.view.rows(),
            header,
            key,
            self.config.property_top_values,
        ))
    }

    /// `[{name, value}]` pie slices of one property key in a column
    #[wasm_bindgen(js_name = propertyValueCounts)]
    pub fn property_value_counts(&self, header: &str, key: &str) -> Result<JsValue, JsValue> {
        to_js(&property_value_counts(self.view.rows(), header, key))
    }

    /// `[{name, <header>: value}]` per-row series of one property key
    #[wasm_bindgen(js_name = propertySeries)]
    pub fn property_series(&self, headers: JsValue, key: &str) -> Result<JsValue, JsValue> {
        let headers = self.selected_headers(headers)?;
        let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
        to_js(&property_series(
            self.view.rows(),
            &headers,
            key,
            self.config.series_rows,
        ))
    }

    /// Per-column statistics for the selected headers (all when omitted)
    #[wasm_bindgen]
    pub fn summarize(&self, headers: JsValue) -> Result<JsValue, JsValue> {
        let headers = self.selected_headers(headers)?;
        let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
        to_js(&summarize(
            self.view.rows(),
            &headers,
            self.config.property_top_values,
        ))
    }

    /// Property keys shared by several of the selected headers
    #[wasm_bindgen(js_name = propertyGroups)]
    pub fn property_groups(&self, headers: JsValue) -> Result<JsValue, JsValue> {
        let headers = self.selected_headers(headers)?;
        let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
        to_js(&property_groups(
            self.view.rows(),
            &headers,
            self.config.property_sample_size,
        ))
    }

    // ========================================
    // TABLE
    // ========================================

    /// One page of the rows matching `term`, with badges
    #[wasm_bindgen]
    pub fn search(&self, term: &str, page: u32) -> Result<JsValue, JsValue> {
        let matches = search(self.view.rows(), self.view.headers(), term);
        let page = paginate(&matches, page as usize, self.config.page_size);
        to_js(&TablePage::from(page))
    }

    /// CSV text of every row matching `term`
    #[wasm_bindgen(js_name = exportCsv)]
    pub fn export_csv(&self, term: &str) -> String {
        let matches = search(self.view.rows(), self.view.headers(), term);
        debug!(rows = matches.len(), "exporting csv");
        export_csv(self.view.headers(), &matches)
    }
}

impl PermissionExplorer {
    /// Build a session over an already loaded dataset
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if a limit is zero.
    pub fn from_dataset(dataset: Dataset, config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        info!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "permission explorer ready"
        );

        Ok(Self {
            view: dataset.clone(),
            dataset,
            filter: RoleFilter::All,
            config,
        })
    }

    /// Switch the role filter and recompute the selected rows
    pub fn apply_filter(&mut self, filter: RoleFilter) {
        self.view = self.dataset.filter_by_role(&filter);
        debug!(?filter, rows = self.view.row_count(), "role filter applied");
        self.filter = filter;
    }

    /// The whole upload
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Rows selected by the current role filter
    pub fn view(&self) -> &Dataset {
        &self.view
    }

    /// Current role filter
    pub fn filter(&self) -> &RoleFilter {
        &self.filter
    }

    /// Current report limits
    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    /// Permission records of the selected rows
    pub fn records(&self) -> Vec<PermissionRecord<'_>> {
        self.view.records()
    }

    fn selected_headers(&self, headers: JsValue) -> Result<Vec<String>, JsValue> {
        if headers.is_undefined() || headers.is_null() {
            return Ok(self.dataset.headers().to_vec());
        }

        let headers: Vec<String> = serde_wasm_bindgen::from_value(headers)
            .map_err(|e| JsValue::from_str(&format!("Invalid header list: {}", e)))?;

        if headers.is_empty() {
            Ok(self.dataset.headers().to_vec())
        } else {
            Ok(headers)
        }
    }
}
