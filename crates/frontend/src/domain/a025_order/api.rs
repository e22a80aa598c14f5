use crate::shared::api_utils::{api_base, orders_api_path};
use contracts::domain::a025_order::{ExportType, OrderListQuery, OrderListResponse};
use gloo_net::http::Request;

fn encode_query(query: &OrderListQuery) -> Result<String, String> {
    serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))
}

pub fn list_url(base: &str, org_slug: &str, query: &OrderListQuery) -> Result<String, String> {
    Ok(format!(
        "{}{}?{}",
        base,
        orders_api_path(org_slug),
        encode_query(query)?
    ))
}

/// Export URL for the same filters and sort as the list; the page is ignored by the server
pub fn export_url(
    base: &str,
    org_slug: &str,
    query: &OrderListQuery,
    export_type: ExportType,
) -> Result<String, String> {
    Ok(format!(
        "{}{}/export?{}&format={}",
        base,
        orders_api_path(org_slug),
        encode_query(query)?,
        export_type.code()
    ))
}

pub fn order_url(base: &str, org_slug: &str, id: &str) -> String {
    format!(
        "{}{}/{}",
        base,
        orders_api_path(org_slug),
        urlencoding::encode(id)
    )
}

pub async fn fetch_orders(org_slug: &str, query: &OrderListQuery) -> Result<OrderListResponse, String> {
    let url = list_url(&api_base(), org_slug, query)?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch orders: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_list_response(&text)
}

pub fn parse_list_response(text: &str) -> Result<OrderListResponse, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Downloads the export file body
pub async fn export_orders(
    org_slug: &str,
    query: &OrderListQuery,
    export_type: ExportType,
) -> Result<Vec<u8>, String> {
    let url = export_url(&api_base(), org_slug, query, export_type)?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Export failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Export failed: server returned {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read export: {}", e))
}

pub async fn delete_order(org_slug: &str, id: &str) -> Result<(), String> {
    let url = order_url(&api_base(), org_slug, id);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to delete: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_order::{OrderSortField, OrderStatus, SortOrder};

    #[test]
    fn test_list_url_carries_paging_and_sort() {
        let query = OrderListQuery {
            page: 3,
            sort_by: OrderSortField::Amount,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let url = list_url("http://localhost:3000", "acme", &query).unwrap();
        assert!(url.starts_with("http://localhost:3000/api/org/acme/orders?"));
        assert!(url.contains("page=3"));
        assert!(url.contains("page_size=20"));
        assert!(url.contains("sort_by=amount"));
        assert!(url.contains("sort_order=asc"));
        assert!(!url.contains("search="));
    }

    #[test]
    fn test_list_url_includes_filters() {
        let query = OrderListQuery {
            search: "ada".to_string(),
            statuses: vec![OrderStatus::Paid],
            ..Default::default()
        };
        let url = list_url("", "acme", &query).unwrap();
        assert!(url.contains("search=ada"));
        assert!(url.contains("paid"));
    }

    #[test]
    fn test_export_url() {
        let url = export_url("", "acme", &OrderListQuery::default(), ExportType::Xlsx).unwrap();
        assert!(url.starts_with("/api/org/acme/orders/export?"));
        assert!(url.ends_with("&format=xlsx"));
    }

    #[test]
    fn test_parse_list_response() {
        let text = r#"{"orders":[{"id":"ord_1","customerName":"Ada","status":"paid","amount":"12.50","orderDate":"2024-03-05T10:00:00Z"}],"total":1,"page":1,"pageSize":20,"totalPages":1}"#;
        let resp = parse_list_response(text).unwrap();
        assert_eq!(resp.orders[0].customer_name, "Ada");
        assert_eq!(resp.orders[0].amount, "12.50");

        let err = parse_list_response("<html>").unwrap_err();
        assert!(err.starts_with("Failed to parse response"));
    }

    #[test]
    fn test_order_url_encodes_id() {
        assert_eq!(
            order_url("", "acme", "ord 1"),
            "/api/org/acme/orders/ord%201"
        );
    }
}
