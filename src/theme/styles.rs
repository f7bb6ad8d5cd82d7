//! Global CSS styles for Usuarios.

pub const GLOBAL_STYLES: &str = r#"
:root {
  --bg: #f4f5f7;
  --surface: #ffffff;
  --border: #d9dce1;
  --text-primary: #1f2430;
  --text-muted: rgba(31, 36, 48, 0.55);
  --accent: #2f6fed;
  --success: #1f7a3d;
  --danger: #c0392b;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: 'Segoe UI', 'Helvetica Neue', sans-serif;
}

.users-page {
  max-width: 480px;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: 1.4rem;
}

.btn {
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 0.5rem 1rem;
  cursor: pointer;
  font-size: 0.95rem;
}

.btn-primary {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: default;
}

.message {
  border-radius: 6px;
  padding: 0.6rem 0.8rem;
  margin-bottom: 1rem;
}

.message-success {
  background: rgba(31, 122, 61, 0.1);
  color: var(--success);
}

.message-error {
  background: rgba(192, 57, 43, 0.1);
  color: var(--danger);
}

.user-list {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.5rem;
}

.user-row {
  display: flex;
  gap: 0.8rem;
  padding: 0.5rem 0.4rem;
  border-bottom: 1px solid var(--border);
}

.user-row:last-child {
  border-bottom: none;
}

.user-email {
  color: var(--text-muted);
  flex: 1;
}

.user-role {
  color: var(--accent);
}

.empty-note {
  color: var(--text-muted);
  padding: 0.8rem 0.4rem;
}

.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 18, 24, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
}

.new-user-card {
  background: var(--surface);
  border-radius: 10px;
  padding: 1.5rem;
  width: min(360px, 90vw);
  display: flex;
  flex-direction: column;
  gap: 0.8rem;
}

.card-title {
  font-size: 1.15rem;
  margin-bottom: 0.4rem;
}

.form-input,
.role-select {
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 0.55rem 0.7rem;
  font-size: 0.95rem;
  width: 100%;
}

.error-text {
  color: var(--danger);
  font-size: 0.85rem;
}

.card-actions {
  display: flex;
  justify-content: flex-end;
  margin-top: 0.4rem;
}
"#;
