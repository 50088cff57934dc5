use super::*;

pub async fn quality_metrics_handler(
    State(state): State<AppState>,
    Extension(_admin): Extension<AdminIdentity>,
) -> ApiResult<Json<QualityReportResponse>> {
    let report = state.quality_service.collect_report().await?;

    Ok(Json(QualityReportResponse::from(report)))
}
