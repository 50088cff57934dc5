use super::*;

#[derive(Debug, serde::Deserialize)]
pub struct RecordHistoryQuery {
    pub limit: Option<usize>,
    pub filter: Option<String>,
}

pub async fn record_history_handler(
    State(state): State<AppState>,
    Extension(_admin): Extension<AdminIdentity>,
    Path((table, record_id)): Path<(String, String)>,
    Query(query): Query<RecordHistoryQuery>,
) -> ApiResult<Json<Vec<AuditEntryResponse>>> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let mut entries = state
        .audit_trail_service
        .fetch_history(&table, &record_id, limit)
        .await?;

    if let Some(filter) = query.filter.as_deref() {
        entries.retain(|entry| entry.matches_filter(filter));
    }

    let history = entries.into_iter().map(AuditEntryResponse::from).collect();

    Ok(Json(history))
}
