//! Global CSS styles for the gallery window.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f4f5f7;
  --surface: #ffffff;
  --border: #e1e4e8;

  --accent: #3867d6;
  --accent-soft: rgba(56, 103, 214, 0.12);

  --text-primary: #1f2328;
  --text-muted: #6a737d;

  --kind-img: #20bf6b;
  --kind-pdf: #eb3b5a;
  --kind-link: #3867d6;
  --kind-doc: #8854d0;


  --font-sans: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
  --radius: 10px;

  --transition-fast: 150ms ease;
  --transition-overlay: 300ms ease;
  --transition-removal: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 15px;
}

.gallery-page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 24px;
  display: flex;
  flex-direction: column;
  gap: 24px;
}

.page-title {
  font-size: 1.6rem;
  font-weight: 600;
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-toggle {
  border-radius: 6px;
  padding: 8px 16px;
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: #fff;
  border: 1px solid var(--accent);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: progress;
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-toggle {
  background: var(--surface);
  color: var(--text-muted);
  border: 1px solid var(--border);
}

.btn-toggle.active {
  background: var(--accent-soft);
  color: var(--accent);
  border-color: var(--accent);
}

.icon-btn {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 1.1rem;
  line-height: 1;
}

.close-btn {
  position: absolute;
  top: 12px;
  right: 16px;
  font-size: 1.6rem;
  color: var(--text-muted);
}

.delete-btn {
  opacity: 0.5;
  transition: opacity var(--transition-fast);
}

.delete-btn:hover {
  opacity: 1;
}

.spinner {
  display: inline-block;
  width: 14px;
  height: 14px;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
  vertical-align: middle;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.input-label {
  font-size: 0.85rem;
  color: var(--text-muted);
}

.input-hint {
  font-style: italic;
}

.input-field, .category-select {
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 8px 10px;
  font: inherit;
  background: var(--surface);
}

.input-field:focus, .category-select:focus {
  outline: none;
  border-color: var(--accent);
}

.textarea {
  resize: vertical;
}

/* === Upload Form === */
.upload-form {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 20px;
  display: grid;
  gap: 12px;
}

.upload-mode {
  display: flex;
  gap: 8px;
}

.file-picker {
  display: flex;
  align-items: center;
  gap: 12px;
}

.file-name {
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* === Filter Bar === */
.filter-bar {
  display: flex;
  gap: 12px;
  align-items: center;
}

.search-input {
  flex: 1;
  display: flex;
  align-items: center;
  gap: 8px;
}

.search-input .input-field {
  flex: 1;
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 16px;
}

.card-grid-empty {
  color: var(--text-muted);
  text-align: center;
  padding: 48px 0;
}

.file-card {
  position: relative;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  transition: opacity var(--transition-removal), transform var(--transition-removal),
    box-shadow var(--transition-fast);
}

.file-card:hover {
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.08);
}

.file-card.removing {
  opacity: 0;
  transform: scale(0.8);
  pointer-events: none;
}

.card-preview {
  height: 140px;
  background: #eef0f3;
  display: flex;
  align-items: center;
  justify-content: center;
}

.card-preview img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card-body {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 10px 12px;
}

.card-icon {
  font-size: 1.4rem;
}

.card-icon.img-type { color: var(--kind-img); }
.card-icon.pdf-type { color: var(--kind-pdf); }
.card-icon.link-type { color: var(--kind-link); }
.card-icon.doc-type { color: var(--kind-doc); }

.card-text {
  flex: 1;
  min-width: 0;
}

.card-title {
  font-weight: 600;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-tag {
  font-size: 0.7rem;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

/* === Detail Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  transition: opacity var(--transition-overlay);
  z-index: 100;
}

.modal-overlay.hidden {
  display: none;
}

.modal-overlay.active {
  opacity: 1;
}

.detail-modal {
  position: relative;
  background: var(--surface);
  border-radius: var(--radius);
  width: min(900px, 92vw);
  max-height: 90vh;
  overflow-y: auto;
  padding: 24px;
  display: flex;
  flex-direction: column;
  gap: 16px;
  transform: translateY(12px);
  transition: transform var(--transition-overlay);
}

.modal-overlay.active .detail-modal {
  transform: translateY(0);
}

.detail-media img {
  max-width: 100%;
  max-height: 60vh;
  display: block;
  margin: 0 auto;
}

.detail-media iframe {
  width: 100%;
  height: 60vh;
  border: none;
}

.detail-link {
  text-align: center;
  padding: 32px 0;
}

.detail-link .card-icon {
  font-size: 3rem;
  display: block;
  margin-bottom: 12px;
}

.detail-title {
  font-size: 1.3rem;
}

.detail-description {
  white-space: pre-wrap;
  color: var(--text-primary);
}

.detail-description.empty {
  color: var(--text-muted);
  font-style: italic;
}

.detail-actions {
  display: flex;
  gap: 8px;
}

.detail-date {
  font-size: 0.85rem;
  color: var(--text-muted);
}
"#;
