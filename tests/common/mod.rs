#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use kanban_client::api::ApiClient;
use kanban_client::types::{
    BoardColumnRequest, BoardColumnResponse, BoardColumnUpdate, LoginRequest, LoginResponse,
    Priority, ProjectRequest, ProjectResponse, TagRequest, TagResponse, TagUpdate, TaskRequest,
    TaskResponse, TaskStatus, TaskUpdate, UserProjectRequest, UserRequest, UserSimplified,
};

pub const TEST_EMAIL: &str = "alice@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";
pub const TEST_USER_ID: i64 = 7;
pub const JWT_SECRET: &[u8] = b"stub-secret";

#[derive(Serialize)]
struct StubClaims {
    #[serde(rename = "userId")]
    user_id: i64,
    sub: String,
    exp: i64,
}

/// Mint a token the way the backend does: HS256 with userId/sub/exp claims.
pub fn mint_token(user_id: i64, sub: &str, exp: i64) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &StubClaims {
            user_id,
            sub: sub.to_string(),
            exp,
        },
        &jsonwebtoken::EncodingKey::from_secret(JWT_SECRET),
    )
    .expect("encode stub token")
}

pub struct Inner {
    /// Token issued at login; protected routes require it as a bearer.
    pub token: Option<String>,
    pub project: ProjectResponse,
    pub next_id: i64,
}

impl Inner {
    fn alloc_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

pub type SharedState = Arc<Mutex<Inner>>;

fn alice() -> UserSimplified {
    UserSimplified {
        id: TEST_USER_ID,
        first_name: "Alice".to_string(),
        last_name: "Martin".to_string(),
        email: TEST_EMAIL.to_string(),
        position: Some("Développeur".to_string()),
    }
}

fn seed_task(id: i64, title: &str, column_id: i64) -> TaskResponse {
    TaskResponse {
        id,
        title: title.to_string(),
        detail: None,
        priority: Priority::Medium,
        task_status: TaskStatus::NotStarted,
        due_date: "31-12-2026".to_string(),
        board_column_id: column_id,
        tags: Vec::new(),
        created_date: Some("01-06-2026".to_string()),
        updated_date: None,
    }
}

fn seed_project() -> ProjectResponse {
    ProjectResponse {
        id: 1,
        name: "Refonte du site".to_string(),
        description: Some("Refonte complète du site vitrine".to_string()),
        start_date: "01-06-2026".to_string(),
        end_date: "31-12-2026".to_string(),
        created_date: Some("01-06-2026".to_string()),
        updated_date: None,
        created_by: alice(),
        users: vec![alice()],
        columns: vec![
            BoardColumnResponse {
                id: 10,
                name: "À faire".to_string(),
                project_id: 1,
                tasks: vec![seed_task(100, "Maquette", 10), seed_task(101, "Spécifications", 10)],
            },
            BoardColumnResponse {
                id: 11,
                name: "En cours".to_string(),
                project_id: 1,
                tasks: Vec::new(),
            },
        ],
    }
}

pub struct StubServer {
    pub base_url: String,
    pub state: SharedState,
}

impl StubServer {
    pub async fn spawn() -> anyhow::Result<Self> {
        let state: SharedState = Arc::new(Mutex::new(Inner {
            token: None,
            project: seed_project(),
            next_id: 1000,
        }));

        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Ok(Self {
            base_url: format!("http://{}/api", addr),
            state,
        })
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url, Duration::from_secs(2)).expect("client")
    }

    /// Make the stub accept `token` as the live session.
    pub fn accept_token(&self, token: &str) {
        self.state.lock().unwrap().token = Some(token.to_string());
    }
}

type ErrorBody = (StatusCode, Json<Value>);

fn unauthorized() -> ErrorBody {
    // No message field: clients should fall back to the default 401 text
    (StatusCode::UNAUTHORIZED, Json(json!({})))
}

fn not_found(message: Option<&str>) -> ErrorBody {
    match message {
        Some(m) => (StatusCode::NOT_FOUND, Json(json!({ "message": m }))),
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

fn require_auth(headers: &HeaderMap, inner: &Inner) -> Result<(), ErrorBody> {
    let expected = match &inner.token {
        Some(token) => format!("Bearer {}", token),
        None => return Err(unauthorized()),
    };
    match headers.get("authorization").and_then(|h| h.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(unauthorized()),
    }
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/users/register", post(register_user))
        .route("/api/users/:id", get(get_user))
        .route("/api/projects/create", post(create_project))
        .route(
            "/api/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/api/projects/:id/adduser", post(add_user_to_project))
        .route("/api/projects/:id/columns", post(create_column))
        .route(
            "/api/projects/:id/columns/:cid",
            get(get_column).put(update_column).delete(delete_column),
        )
        .route("/api/projects/:id/columns/:cid/tasks", post(create_task))
        .route(
            "/api/projects/:id/columns/:cid/tasks/:tid",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route(
            "/api/projects/:id/columns/:cid/tasks/:tid/tags",
            post(create_tag),
        )
        .route(
            "/api/projects/:id/columns/:cid/tasks/:tid/tags/:tagid",
            get(get_tag).put(update_tag).delete(delete_tag),
        )
        .with_state(state)
}

async fn login(
    State(state): State<SharedState>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ErrorBody> {
    if credentials.email != TEST_EMAIL || credentials.password != TEST_PASSWORD {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Identifiants invalides" })),
        ));
    }
    let exp = Utc::now().timestamp() + 3600;
    let token = mint_token(TEST_USER_ID, TEST_EMAIL, exp);
    state.lock().unwrap().token = Some(token.clone());
    Ok(Json(LoginResponse {
        id: TEST_USER_ID,
        first_name: Some("Alice".to_string()),
        last_name: Some("Martin".to_string()),
        email: TEST_EMAIL.to_string(),
        position: Some("Développeur".to_string()),
        created_date: Some("01-06-2026".to_string()),
        updated_date: None,
        token,
    }))
}

async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> Result<(), ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    inner.token = None;
    Ok(())
}

async fn register_user(Json(user): Json<UserRequest>) -> Result<Json<Value>, ErrorBody> {
    if user.email == TEST_EMAIL {
        return Err((
            StatusCode::CONFLICT,
            Json(json!({ "message": "Cet email est déjà utilisé" })),
        ));
    }
    Ok(Json(json!({
        "id": 8,
        "firstName": user.first_name,
        "lastName": user.last_name,
        "email": user.email,
        "position": user.position,
        "createdDate": "01-06-2026",
    })))
}

async fn get_user(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ErrorBody> {
    let inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if id != TEST_USER_ID {
        return Err(not_found(None));
    }
    Ok(Json(json!({
        "id": TEST_USER_ID,
        "firstName": "Alice",
        "lastName": "Martin",
        "email": TEST_EMAIL,
        "position": "Développeur",
        "createdDate": "01-06-2026",
        "createdProjects": [],
        "userProjects": [],
    })))
}

async fn create_project(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<ProjectResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    let id = inner.alloc_id();
    let project = ProjectResponse {
        id,
        name: request.name,
        description: request.description,
        start_date: request.start_date,
        end_date: request.end_date,
        created_date: Some("01-06-2026".to_string()),
        updated_date: None,
        created_by: alice(),
        users: vec![alice()],
        columns: Vec::new(),
    };
    Ok(Json(project))
}

async fn get_project(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<ProjectResponse>, ErrorBody> {
    let inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    Ok(Json(inner.project.clone()))
}

async fn update_project(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<ProjectResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    inner.project.name = request.name;
    inner.project.description = request.description;
    inner.project.start_date = request.start_date;
    inner.project.end_date = request.end_date;
    inner.project.updated_date = Some("02-06-2026".to_string());
    Ok(Json(inner.project.clone()))
}

async fn delete_project(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<(), ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    // The board empties out; subsequent GETs on the old id 404
    inner.project.id = -1;
    Ok(())
}

async fn add_user_to_project(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(membership): Json<UserProjectRequest>,
) -> Result<Json<Value>, ErrorBody> {
    let inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    if membership.user_email == TEST_EMAIL {
        return Err((
            StatusCode::CONFLICT,
            Json(json!({ "message": "Utilisateur déjà assigné au projet" })),
        ));
    }
    Ok(Json(json!({ "message": "Utilisateur ajouté" })))
}

async fn create_column(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(request): Json<BoardColumnRequest>,
) -> Result<Json<BoardColumnResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let column = BoardColumnResponse {
        id: inner.alloc_id(),
        name: request.name,
        project_id: id,
        tasks: Vec::new(),
    };
    inner.project.columns.push(column.clone());
    Ok(Json(column))
}

async fn get_column(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid)): Path<(i64, i64)>,
) -> Result<Json<BoardColumnResponse>, ErrorBody> {
    let inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    inner
        .project
        .columns
        .iter()
        .find(|c| c.id == cid)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(None))
}

async fn update_column(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid)): Path<(i64, i64)>,
    Json(update): Json<BoardColumnUpdate>,
) -> Result<Json<BoardColumnResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let column = inner
        .project
        .columns
        .iter_mut()
        .find(|c| c.id == cid)
        .ok_or_else(|| not_found(None))?;
    if let Some(name) = update.name {
        column.name = name;
    }
    Ok(Json(column.clone()))
}

async fn delete_column(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid)): Path<(i64, i64)>,
) -> Result<Json<ProjectResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let before = inner.project.columns.len();
    inner.project.columns.retain(|c| c.id != cid);
    if inner.project.columns.len() == before {
        return Err(not_found(None));
    }
    Ok(Json(inner.project.clone()))
}

async fn create_task(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid)): Path<(i64, i64)>,
    Json(request): Json<TaskRequest>,
) -> Result<Json<TaskResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let task_id = inner.alloc_id();
    let task = TaskResponse {
        id: task_id,
        title: request.title,
        detail: request.detail,
        priority: request.priority,
        task_status: request.task_status,
        due_date: request.due_date,
        board_column_id: cid,
        tags: Vec::new(),
        created_date: Some("01-06-2026".to_string()),
        updated_date: None,
    };
    let column = inner
        .project
        .columns
        .iter_mut()
        .find(|c| c.id == cid)
        .ok_or_else(|| not_found(None))?;
    column.tasks.push(task.clone());
    Ok(Json(task))
}

fn find_task_mut<'a>(inner: &'a mut Inner, cid: i64, tid: i64) -> Option<&'a mut TaskResponse> {
    inner
        .project
        .columns
        .iter_mut()
        .find(|c| c.id == cid)?
        .tasks
        .iter_mut()
        .find(|t| t.id == tid)
}

async fn get_task(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid, tid)): Path<(i64, i64, i64)>,
) -> Result<Json<TaskResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    find_task_mut(&mut inner, cid, tid)
        .map(|t| Json(t.clone()))
        .ok_or_else(|| not_found(Some("Tâche introuvable")))
}

async fn update_task(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid, tid)): Path<(i64, i64, i64)>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<TaskResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let task = find_task_mut(&mut inner, cid, tid)
        .ok_or_else(|| not_found(Some("Tâche introuvable")))?;
    if let Some(title) = update.title {
        task.title = title;
    }
    if let Some(detail) = update.detail {
        task.detail = Some(detail);
    }
    if let Some(priority) = update.priority {
        task.priority = priority;
    }
    if let Some(status) = update.task_status {
        task.task_status = status;
    }
    if let Some(due_date) = update.due_date {
        task.due_date = due_date;
    }
    task.updated_date = Some("02-06-2026".to_string());
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid, tid)): Path<(i64, i64, i64)>,
) -> Result<(), ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let column = inner
        .project
        .columns
        .iter_mut()
        .find(|c| c.id == cid)
        .ok_or_else(|| not_found(None))?;
    let before = column.tasks.len();
    column.tasks.retain(|t| t.id != tid);
    if column.tasks.len() == before {
        return Err(not_found(Some("Tâche introuvable")));
    }
    Ok(())
}

async fn create_tag(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid, tid)): Path<(i64, i64, i64)>,
    Json(request): Json<TagRequest>,
) -> Result<Json<TagResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let tag_id = inner.alloc_id();
    let task = find_task_mut(&mut inner, cid, tid)
        .ok_or_else(|| not_found(Some("Tâche introuvable")))?;
    let tag = TagResponse {
        id: tag_id,
        designation: request.designation,
        color: request.color,
        task_id: tid,
        created_date: Some("01-06-2026".to_string()),
        updated_date: None,
    };
    task.tags.push(tag.clone());
    Ok(Json(tag))
}

async fn get_tag(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid, tid, tagid)): Path<(i64, i64, i64, i64)>,
) -> Result<Json<TagResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let task = find_task_mut(&mut inner, cid, tid)
        .ok_or_else(|| not_found(Some("Tâche introuvable")))?;
    task.tags
        .iter()
        .find(|t| t.id == tagid)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(None))
}

async fn update_tag(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid, tid, tagid)): Path<(i64, i64, i64, i64)>,
    Json(update): Json<TagUpdate>,
) -> Result<Json<TagResponse>, ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let task = find_task_mut(&mut inner, cid, tid)
        .ok_or_else(|| not_found(Some("Tâche introuvable")))?;
    let tag = task
        .tags
        .iter_mut()
        .find(|t| t.id == tagid)
        .ok_or_else(|| not_found(None))?;
    if let Some(designation) = update.designation {
        tag.designation = designation;
    }
    if let Some(color) = update.color {
        tag.color = Some(color);
    }
    Ok(Json(tag.clone()))
}

async fn delete_tag(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((id, cid, tid, tagid)): Path<(i64, i64, i64, i64)>,
) -> Result<(), ErrorBody> {
    let mut inner = state.lock().unwrap();
    require_auth(&headers, &inner)?;
    if inner.project.id != id {
        return Err(not_found(None));
    }
    let task = find_task_mut(&mut inner, cid, tid)
        .ok_or_else(|| not_found(Some("Tâche introuvable")))?;
    let before = task.tags.len();
    task.tags.retain(|t| t.id != tagid);
    if task.tags.len() == before {
        return Err(not_found(None));
    }
    Ok(())
}
