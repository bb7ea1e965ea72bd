mod support;

use axum::http::StatusCode;
use serde_json::json;
use server::ServiceKind;

use support::{empty_app, seeded_app, send};

#[tokio::test]
async fn seeded_list_has_five_animals() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;
    let (status, body) = send(&app, "GET", "/animals", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["pages"], 1);
    assert_eq!(body["current_page"], 1);
    assert!(body["next_page"].is_null());
    assert!(body["prev_page"].is_null());
    assert_eq!(body["animals"][0], json!({"id": 1, "name": "Leo", "species": "Lion", "age": 5}));
    Ok(())
}

#[tokio::test]
async fn unknown_sort_field_is_a_client_error() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;
    let (status, body) = send(&app, "GET", "/animals?sort_by=color", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid sort parameter.");
    Ok(())
}

#[tokio::test]
async fn filter_search_and_sort() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;

    let (_, body) = send(&app, "GET", "/animals?species=Cat", None).await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["animals"][0]["name"], "Milo");

    let (_, body) = send(&app, "GET", "/animals?name=CO", None).await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["animals"][0]["name"], "Coco");

    let (_, body) = send(&app, "GET", "/animals?sort_by=age", None).await?;
    let ages: Vec<_> = body["animals"].as_array().unwrap().iter().map(|a| a["age"].as_i64().unwrap()).collect();
    assert_eq!(ages, [1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn pagination_links() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;
    let (status, body) = send(&app, "GET", "/animals?per_page=2&page=2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["next_page"], 3);
    assert_eq!(body["prev_page"], 1);
    assert_eq!(body["animals"].as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn page_past_sqlite_offset_range_is_rejected() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;
    let (status, _) = send(&app, "GET", "/animals?page=18446744073709551615", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "GET", "/animals?page=1000000000000000000&per_page=100", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn create_persists_animal() -> anyhow::Result<()> {
    let app = empty_app(ServiceKind::Animals).await?;
    let (status, created) = send(&app, "POST", "/animals", Some(json!({"name": "Snow Leopard", "species": "Cat", "age": 4}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Snow Leopard");

    let uri = format!("/animals/{}", created["id"]);
    let (status, fetched) = send(&app, "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn create_validates() -> anyhow::Result<()> {
    let app = empty_app(ServiceKind::Animals).await?;
    let (status, body) = send(&app, "POST", "/animals", Some(json!({"name": "Leo", "species": "Lion", "age": -1}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid age");

    let (status, body) = send(&app, "POST", "/animals", Some(json!({"name": "Leo", "species": "Lion", "age": "five"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid age");

    let (status, body) = send(&app, "POST", "/animals", Some(json!({"name": "Le0", "species": "Lion", "age": "five"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid name");

    let (_, body) = send(&app, "GET", "/animals", None).await?;
    assert_eq!(body["total"], 0);
    Ok(())
}

#[tokio::test]
async fn age_above_i32_range_is_stored() -> anyhow::Result<()> {
    let app = empty_app(ServiceKind::Animals).await?;
    let (status, created) = send(&app, "POST", "/animals", Some(json!({"name": "Methuselah", "species": "Pine", "age": 3_000_000_000_i64}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["age"], 3_000_000_000_i64);

    let (_, fetched) = send(&app, "GET", &format!("/animals/{}", created["id"]), None).await?;
    assert_eq!(fetched["age"], 3_000_000_000_i64);
    Ok(())
}

#[tokio::test]
async fn update_persists_and_validates() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;
    let (status, body) = send(&app, "PUT", "/animals/2", Some(json!({"name": "Milo", "species": "Cat", "age": 4}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "name": "Milo", "species": "Cat", "age": 4}));

    let (_, body) = send(&app, "GET", "/animals/2", None).await?;
    assert_eq!(body["age"], 4);

    let (status, body) = send(&app, "PUT", "/animals/2", Some(json!({"name": "M1lo", "species": "Cat", "age": 4}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid name");

    let (status, _) = send(&app, "PUT", "/animals/404", Some(json!({"name": "Milo", "species": "Cat", "age": 4}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/animals/404", Some(json!({"name": "Milo", "age": "old"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn missing_animal_is_not_found() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;
    let (status, body) = send(&app, "GET", "/animals/77", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "animal not found");
    Ok(())
}

#[tokio::test]
async fn animals_have_no_delete_route() -> anyhow::Result<()> {
    let app = seeded_app(ServiceKind::Animals).await?;
    let (status, _) = send(&app, "DELETE", "/animals/1", None).await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}
