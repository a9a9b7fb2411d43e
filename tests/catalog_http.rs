use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use catalog::config::SiteConfig;
use catalog::{build_router, AppState, MemoryProductStore, NewProduct, ProductStore};

fn make_app() -> (Router, Arc<MemoryProductStore>) {
    let store = Arc::new(MemoryProductStore::new());
    let state = AppState::new(store.clone(), SiteConfig::default());
    (build_router(state), store)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(res: axum::response::Response) -> String {
    let body = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.into()).unwrap()
}

fn location(res: &axum::response::Response) -> &str {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn names(store: &MemoryProductStore) -> Vec<String> {
    store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect()
}

#[tokio::test]
async fn it_lists_products_sorted_by_name() {
    let (app, store) = make_app();
    for name in ["Pencil", "Mug", "Apple"] {
        store.create(NewProduct::new(name, "d", 1)).await.unwrap();
    }

    let res = app.oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = body_text(res).await;

    assert!(text.contains("<h1>Shoppers</h1>"));
    let apple = text.find(">Apple<").unwrap();
    let mug = text.find(">Mug<").unwrap();
    let pencil = text.find(">Pencil<").unwrap();
    assert!(apple < mug && mug < pencil);
}

#[tokio::test]
async fn it_runs_the_create_list_delete_example() {
    let (app, store) = make_app();

    let res = app
        .clone()
        .oneshot(post_form("/create", "name=Mug&description=Ceramic&price=10"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
    assert_eq!(names(&store).await, ["Mug"]);

    let id = store.list_all().await.unwrap()[0].id;
    let product = store.get(id).await.unwrap();
    assert_eq!(product.description, "Ceramic");
    assert_eq!(product.price, 10);

    let res = app
        .oneshot(post_form(&format!("/{}/delete", id), ""))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(names(&store).await.is_empty());
}

#[tokio::test]
async fn it_shows_the_empty_create_form() {
    let (app, _) = make_app();

    let res = app.oneshot(get("/create")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = body_text(res).await;
    assert!(text.contains(r#"action="/create""#));
    assert!(text.contains("<textarea"));
}

#[tokio::test]
async fn it_rerenders_create_form_on_invalid_input() {
    let (app, store) = make_app();

    let res = app
        .oneshot(post_form("/create", "name=&description=Ceramic&price=ten"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = body_text(res).await;
    assert!(text.contains("This field is required."));
    assert!(text.contains("Enter a whole number."));
    assert!(text.contains(r#"value="ten""#));

    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_treats_missing_fields_as_empty() {
    let (app, store) = make_app();

    let res = app
        .oneshot(post_form("/create", "name=Mug"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_shows_details_with_all_products() {
    let (app, store) = make_app();
    let mug = store.create(NewProduct::new("Mug", "Ceramic", 10)).await.unwrap();
    store.create(NewProduct::new("Bowl", "Wooden", 8)).await.unwrap();

    let res = app
        .oneshot(get(&format!("/{}/details", mug.id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = body_text(res).await;
    assert!(text.contains("<h1>Mug</h1>"));
    assert!(text.contains("Ceramic"));
    assert!(text.contains(">Bowl</a>"));
}

#[tokio::test]
async fn it_returns_404_for_unknown_ids() {
    let (app, _) = make_app();

    for uri in ["/42/details", "/42/update", "/42/delete"] {
        let res = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {}", uri);
    }

    let res = app
        .clone()
        .oneshot(post_form("/42/delete", ""))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_text(res).await.contains("No product found with id 42."));
}

#[tokio::test]
async fn it_returns_404_for_non_numeric_ids_and_unknown_paths() {
    let (app, _) = make_app();

    for uri in ["/abc/details", "/-1/details", "/1.5/update", "/nothing/here/at/all"] {
        let res = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {}", uri);
    }
}

#[tokio::test]
async fn it_prefills_the_update_form() {
    let (app, store) = make_app();
    let mug = store.create(NewProduct::new("Mug", "Ceramic", 10)).await.unwrap();

    let res = app
        .oneshot(get(&format!("/{}/update", mug.id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = body_text(res).await;
    assert!(text.contains(r#"value="Mug""#));
    assert!(text.contains(">Ceramic</textarea>"));
    assert!(text.contains(r#"value="10""#));
}

#[tokio::test]
async fn it_updates_all_fields() {
    let (app, store) = make_app();
    let mug = store.create(NewProduct::new("Mug", "Ceramic", 10)).await.unwrap();

    let res = app
        .oneshot(post_form(
            &format!("/{}/update", mug.id),
            "name=Cup&description=Glass+cup&price=12",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let updated = store.get(mug.id).await.unwrap();
    assert_eq!(updated.name, "Cup");
    assert_eq!(updated.description, "Glass cup");
    assert_eq!(updated.price, 12);
}

#[tokio::test]
async fn it_keeps_the_product_on_invalid_update() {
    let (app, store) = make_app();
    let mug = store.create(NewProduct::new("Mug", "Ceramic", 10)).await.unwrap();

    let res = app
        .oneshot(post_form(
            &format!("/{}/update", mug.id),
            "name=Cup&description=Glass&price=",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("This field is required."));
    assert_eq!(store.get(mug.id).await.unwrap(), mug);
}

#[tokio::test]
async fn it_reports_not_found_on_update_of_unknown_id() {
    let (app, store) = make_app();
    let mug = store.create(NewProduct::new("Mug", "Ceramic", 10)).await.unwrap();

    let res = app
        .oneshot(post_form("/99/update", "name=Cup&description=Glass&price=12"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.list_all().await.unwrap(), vec![mug]);
}

#[tokio::test]
async fn it_shows_the_delete_confirmation() {
    let (app, store) = make_app();
    let mug = store.create(NewProduct::new("Mug", "Ceramic", 10)).await.unwrap();

    let res = app
        .oneshot(get(&format!("/{}/delete", mug.id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = body_text(res).await;
    assert!(text.contains("Are you sure you want to delete"));
    assert!(text.contains(&format!(r#"action="/{}/delete""#, mug.id)));
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn it_rejects_null_characters_as_a_form_error() {
    let (app, store) = make_app();

    let res = app
        .oneshot(post_form("/create", "name=Mu%00g&description=Ceramic&price=10"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("Null characters are not allowed."));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_renders_an_html_page_for_non_form_bodies() {
    let (app, store) = make_app();

    let req = Request::builder()
        .method("POST")
        .uri("/create")
        .body(Body::from("name=Mug&description=Ceramic&price=10"))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(body_text(res).await.contains("<h1>Bad request</h1>"));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_checks_the_product_before_the_form_body_on_update() {
    let (app, _) = make_app();

    let req = Request::builder()
        .method("POST")
        .uri("/7/update")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
