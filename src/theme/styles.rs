//! Global CSS styles for Manifest Mastery.
//!
//! Soft purple and pink palette on a light page, one centered column.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAGE */
  --page-bg: #f7f3fb;
  --surface: #ffffff;
  --surface-muted: #faf7fd;
  --border: #e6dcef;

  /* PURPLE (Brand, Primary actions) */
  --purple: #9333ea;
  --purple-deep: #6b21a8;
  --purple-soft: #efe4f6;
  --purple-glow: rgba(147, 51, 234, 0.2);

  /* PINK (Accent, Progress) */
  --pink: #ec4899;
  --pink-soft: #fbe3ef;

  /* TEXT */
  --text-primary: #2b2233;
  --text-secondary: rgba(43, 34, 51, 0.75);
  --text-muted: rgba(43, 34, 51, 0.5);

  /* SEMANTIC */
  --danger: #dc2626;
  --danger-soft: #fde8ec;
  --info: #4a6fd1;
  --info-soft: #e8eefc;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--page-bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
}

/* === Shell === */
.wizard {
  max-width: 760px;
  margin: 0 auto;
  padding: 2rem 1.5rem 3rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.wizard-header {
  text-align: center;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  color: var(--purple-deep);
  letter-spacing: 0.02em;
}

.tagline {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.wizard-body {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
  box-shadow: 0 8px 24px var(--purple-glow);
}

.wizard-footer,
.button-row {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

/* === Progress === */
.progress {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.progress-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.progress-track {
  height: 8px;
  background: var(--purple-soft);
  border-radius: 999px;
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--purple), var(--pink));
  transition: width var(--transition-normal);
}

/* === Alerts === */
.alert {
  border-radius: var(--radius);
  padding: 0.75rem 1rem;
  border-left: 4px solid;
}

.alert--error {
  background: var(--danger-soft);
  border-color: var(--danger);
  color: var(--danger);
}

.alert--info {
  background: var(--info-soft);
  border-color: var(--info);
  color: var(--info);
}

.alert-title {
  font-weight: 600;
  display: block;
}

.alert-message {
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost {
  font: inherit;
  border-radius: 999px;
  padding: 0.6rem 1.4rem;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--purple);
  border: 1px solid var(--purple);
  color: #ffffff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--purple-deep);
}

.btn-outline {
  background: transparent;
  border: 1px solid var(--purple);
  color: var(--purple);
}

.btn-outline:hover:not(:disabled) {
  background: var(--purple-soft);
}

.btn-ghost {
  background: transparent;
  border: 1px solid transparent;
  color: var(--text-secondary);
}

.btn-wide {
  width: 100%;
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 1rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-secondary);
}

.input-field {
  font: inherit;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--surface-muted);
  color: var(--text-primary);
}

.input-field:focus {
  outline: none;
  border-color: var(--purple);
  box-shadow: 0 0 0 3px var(--purple-glow);
}

.textarea {
  resize: vertical;
}

.input-hint {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Goal Pills === */
.choice-pills-wrapper {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.choice-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.pill {
  font: inherit;
  font-size: var(--text-sm);
  padding: 0.4rem 0.9rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

.pill.selected {
  background: var(--pink-soft);
  border-color: var(--pink);
  color: var(--purple-deep);
}

.pill.disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

/* === Accordion Prompts === */
.accordion {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.prompt-item {
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--surface-muted);
}

.prompt-summary {
  cursor: pointer;
  padding: 0.6rem 0.9rem;
  font-weight: 600;
  display: flex;
  justify-content: space-between;
}

.prompt-check {
  color: var(--pink);
}

.prompt-body {
  padding: 0 0.9rem 0.6rem;
}

/* === Cards === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
}

.card-title {
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--purple);
  margin-bottom: 0.5rem;
}

/* === Pages === */
.step-page {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.section-header {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--purple-deep);
}

.instructions,
.body-text {
  color: var(--text-secondary);
}

.hint-text,
.muted {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.centered {
  text-align: center;
  align-items: center;
}

.logo-mark {
  font-size: 3rem;
  color: var(--pink);
  text-align: center;
}

.welcome,
.intro {
  text-align: center;
}

.welcome-headline {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  color: var(--purple-deep);
}

.goal-block {
  border-top: 1px solid var(--border);
  padding-top: 1rem;
}

.goal-title,
.stage-title {
  font-size: var(--text-lg);
  color: var(--purple);
  margin-bottom: 0.5rem;
}

/* === Statements and Script === */
.statement-group {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.statement {
  background: var(--purple-soft);
  border-radius: 8px;
  padding: 0.6rem 0.9rem;
}

.script-box {
  background: var(--surface-muted);
  border: 1px dashed var(--purple);
  border-radius: var(--radius);
  padding: 1.25rem;
}

.script-text {
  white-space: pre-line;
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

/* === Vision Board === */
.vision-section,
.board-entry {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.board-statements {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.board-image {
  max-width: 100%;
  max-height: 280px;
  border-radius: var(--radius);
  object-fit: cover;
}

.image-upload {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.image-upload-btn {
  align-self: flex-start;
}

.image-upload__error {
  color: var(--danger);
  font-size: var(--text-sm);
}

.image-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 160px;
  border: 1px dashed var(--border);
  border-radius: var(--radius);
  color: var(--text-muted);
}

.overview-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

/* === Plan === */
.plan-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding-left: 1.25rem;
}

.plan-item__title {
  font-weight: 600;
  color: var(--purple-deep);
}

.mantra {
  list-style: none;
  font-style: italic;
}

.plan-dashboard {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.dashboard-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  margin-top: 1rem;
}

.dashboard-board {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 1rem;
}

.dashboard-side {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}
"#;
