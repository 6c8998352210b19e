//! Global CSS styles for Product Image Studio.
//!
//! Soft gradient workspace, white glass panels, slate type.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --canvas-top: #f8fafc;
  --canvas-bottom: #e2e8f0;
  --panel: rgba(255, 255, 255, 0.72);
  --panel-border: rgba(148, 163, 184, 0.35);

  /* INK */
  --ink: #0f172a;
  --ink-soft: #334155;
  --ink-muted: #64748b;

  /* ACCENTS */
  --focus: #6366f1;
  --focus-glow: rgba(99, 102, 241, 0.25);
  --danger: #e11d48;

  /* Typography */
  --font-sans: Geist, Inter, 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(180deg, var(--canvas-top), var(--canvas-bottom));
  color: var(--ink);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout === */
.studio {
  display: grid;
  grid-template-columns: minmax(300px, 360px) 1fr;
  gap: 1.5rem;
  padding: 1.5rem;
  min-height: 100vh;
}

.editor-panel,
.preview-gallery {
  background: var(--panel);
  border: 1px solid var(--panel-border);
  border-radius: 24px;
  padding: 1.5rem;
  backdrop-filter: blur(16px);
}

.editor-panel {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-self: start;
}

/* === Typography === */
.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  letter-spacing: -0.02em;
}

.page-intro {
  margin-top: 0.25rem;
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

.section-title {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 1rem;
}

/* === Buttons === */
.btn-primary {
  padding: 0.5rem 1.1rem;
  border-radius: 999px;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--ink);
  border: 1px solid var(--ink);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--ink-soft);
  transform: translateY(-1px);
}

.is-busy {
  opacity: 0.7;
  cursor: progress;
}

/* === Input Fields === */
.form-field {
  display: flex;
  flex-direction: column;
}

.form-group {
  border: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  display: block;
  margin-bottom: 0.4rem;
  color: var(--ink-soft);
  font-size: var(--text-sm);
  font-weight: 600;
}

.input-field {
  width: 100%;
  padding: 0.6rem 0.85rem;
  background: rgba(255, 255, 255, 0.85);
  border: 1px solid var(--panel-border);
  border-radius: 12px;
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  transition: all var(--transition-fast);
}

.input-field::placeholder {
  color: var(--ink-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--focus);
  box-shadow: 0 0 0 3px var(--focus-glow);
}

.textarea {
  resize: vertical;
  min-height: 6rem;
}

/* === Palette Picker === */
.palette-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.6rem;
}

.palette-option {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  padding: 0.5rem;
  border: 1px solid var(--panel-border);
  border-radius: 16px;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.palette-option.selected {
  border-color: var(--ink);
  box-shadow: 0 0 0 2px var(--focus-glow);
}

.palette-radio {
  position: absolute;
  opacity: 0;
  pointer-events: none;
}

.palette-option:focus-within {
  border-color: var(--focus);
}

.palette-swatch {
  display: block;
  height: 3rem;
  border-radius: 12px;
}

.palette-name {
  font-size: var(--text-sm);
  font-weight: 600;
}

.palette-check {
  position: absolute;
  top: 0.9rem;
  right: 0.9rem;
  width: 1.4rem;
  height: 1.4rem;
  border-radius: 999px;
  background: var(--ink);
  color: #ffffff;
  font-size: var(--text-xs);
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Preview Gallery === */
.preview-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 1.25rem;
}

.preview-panel {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.preview-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.preview-title {
  font-size: var(--text-base);
  font-weight: 600;
}

.preview-frame {
  border-radius: 28px;
  overflow: hidden;
  box-shadow: 0 20px 45px rgba(15, 23, 42, 0.12);
}

.preview-card {
  display: block;
  width: 100%;
  height: auto;
}

.preview-error {
  color: var(--danger);
  font-size: var(--text-sm);
}

.preview-path {
  color: var(--ink-muted);
  font-size: var(--text-xs);
  word-break: break-all;
}
"#;
