use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Portfolio API</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 3rem auto; color: #222; }
    code { background: #f3f3f3; padding: 0.1rem 0.3rem; border-radius: 3px; }
    li { margin: 0.3rem 0; }
  </style>
</head>
<body>
  <h1>Portfolio API</h1>
  <p>The server is running. Available endpoints:</p>
  <ul>
    <li><code>GET /api/projects</code></li>
    <li><code>GET /api/projects/:id</code></li>
    <li><code>POST /api/projects</code></li>
    <li><code>PUT /api/projects/:id</code></li>
    <li><code>DELETE /api/projects/:id</code></li>
    <li><code>POST /api/contact</code></li>
  </ul>
</body>
</html>
"#;

/// GET / - Static landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
