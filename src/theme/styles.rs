//! Global CSS styles for the Apology Card.
//!
//! Palette variables come from `colors::root_variables`; this sheet only
//! refers to them by name.

pub const GLOBAL_STYLES: &str = r#"
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
  font-family: 'Inter', system-ui, sans-serif;
  background: var(--snow);
  color: var(--slate-800);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page === */
.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  overflow: hidden;
  position: relative;
}

.step {
  width: 100%;
  display: flex;
  justify-content: center;
  position: relative;
  z-index: 1;
}

.step-intro { max-width: 48rem; width: 100%; }
.step-apology { max-width: 64rem; width: 100%; text-align: center; }
.step-reunion { max-width: 56rem; width: 100%; }
.step-voucher { max-width: 36rem; width: 100%; }

/* === Step entry motion === */
@keyframes step-rise {
  from { transform: translateY(40px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes step-scale-in {
  from { transform: scale(0.98); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

.step-rise { animation: step-rise 0.5s ease-out both; }
.step-scale-in { animation: step-scale-in 0.4s ease-out both; }

/* === Card frame === */
.fancy-card {
  position: relative;
  overflow: hidden;
  background: var(--white);
  border: 2px solid var(--rose-border);
  border-radius: 3rem;
  box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
  padding: 1.5rem;
}

.fancy-card.centered { text-align: center; }

.reunion-card {
  border-radius: 4rem;
  border-bottom: 12px solid var(--rose-pale);
}

.card-watermark {
  position: absolute;
  top: -4rem;
  right: -4rem;
  font-size: 11rem;
  color: var(--rose);
  opacity: 0.1;
  transform: rotate(12deg);
  pointer-events: none;
}

.card-body {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
}

/* === Characters === */
.character {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.character-img {
  object-fit: contain;
  user-select: none;
}

.character-hero { width: 14rem; height: 14rem; }
.character-pair { width: 12.5rem; height: 12.5rem; }

.character-pair-row {
  display: flex;
  flex-direction: row;
  justify-content: center;
  align-items: center;
  gap: 2rem;
  margin-bottom: 3rem;
}

.photo-row {
  display: flex;
  justify-content: center;
  margin-bottom: 2rem;
}

.photo {
  max-width: 100%;
  height: auto;
  object-fit: contain;
  border-radius: 1rem;
}

/* === Typography === */
.title-rose,
.title-dark {
  font-family: Georgia, 'Times New Roman', serif;
  font-weight: 900;
  line-height: 1.2;
}

.title-rose {
  margin-top: 1.5rem;
  font-size: 2rem;
  color: var(--rose-dark);
}

.title-dark {
  font-size: 2.5rem;
  margin-bottom: 1rem;
  color: var(--slate-800);
}

.lead {
  margin-top: 1rem;
  font-size: 1.125rem;
  color: var(--slate-500);
  max-width: 42rem;
  margin-left: auto;
  margin-right: auto;
}

.wide-text { max-width: 48rem; }
.italic { font-style: italic; }
.bold { font-weight: 700; }

.date-highlight {
  color: var(--rose-soft);
  font-weight: 700;
}

.date-highlight.strong {
  color: var(--rose);
  font-weight: 900;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--rose);
  color: var(--white);
  padding: 0.5rem 1.75rem;
  border-radius: 9999px;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 2rem;
}

/* === Buttons === */
.btn-primary,
.btn-dark,
.btn-muted {
  border: none;
  font-family: inherit;
  font-size: 1.125rem;
  padding: 1.25rem 2.5rem;
  border-radius: 1.5rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  line-height: 1.4;
  text-align: center;
}

.btn-primary {
  background: var(--rose);
  color: var(--white);
  font-weight: 900;
  box-shadow: 0 10px 15px -3px rgba(244, 63, 94, 0.3);
  cursor: pointer;
  transition: background 150ms ease, transform 150ms ease;
}

.btn-primary:hover {
  background: var(--rose-dark);
  transform: scale(1.03);
}

.btn-primary.wide { width: 100%; border-radius: 1rem; }

.btn-dark {
  background: var(--slate-900);
  color: var(--white);
  font-weight: 900;
  box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.4);
  cursor: pointer;
}

.btn-dark:hover { background: #020617; }

.btn-link {
  background: none;
  border: none;
  font-family: inherit;
  font-weight: 900;
  color: var(--rose-muted);
  text-decoration: underline;
  text-underline-offset: 4px;
  cursor: pointer;
}

.btn-link:hover { color: var(--rose-border); }

.btn-muted {
  background: var(--slate-100);
  color: var(--slate-400);
  font-weight: 700;
  cursor: default;
  user-select: none;
}

.arrow { transition: transform 150ms ease; }
.btn-primary:hover .arrow,
.btn-dark:hover .arrow { transform: translateX(0.5rem); }

.label-long { display: none; }
.label-short { display: block; }

.action-row {
  margin-top: 2.5rem;
  display: flex;
  justify-content: center;
  width: 100%;
}

.action-row.narrow { max-width: 28rem; }

.choice-row {
  margin-top: 2.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.75rem;
  justify-content: center;
  align-items: center;
}

.accept { z-index: 10; }

/* === Voucher === */
.voucher {
  position: relative;
  overflow: hidden;
  background: var(--slate-900);
  color: var(--white);
  padding: 2rem;
  border-radius: 3.5rem;
  border: 2px solid var(--rose-soft);
  box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.5);
}

.voucher-watermark {
  position: absolute;
  top: 0;
  right: 0;
  padding: 2rem;
  font-size: 7.5rem;
  color: var(--rose);
  opacity: 0.2;
  transform: rotate(12deg);
  pointer-events: none;
}

.voucher-body { position: relative; z-index: 1; }
.voucher-header { margin-bottom: 3rem; }

.voucher-kicker {
  color: var(--rose-soft);
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.05em;
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.voucher-title {
  font-family: Georgia, serif;
  font-size: 1.875rem;
  font-weight: 700;
  font-style: italic;
}

.voucher-lines {
  display: flex;
  flex-direction: column;
  gap: 1.75rem;
  margin-bottom: 3rem;
  font-size: 1.125rem;
}

.voucher-line {
  display: flex;
  justify-content: space-between;
  border-bottom: 1px solid var(--slate-800);
  padding-bottom: 1rem;
}

.voucher-label { color: var(--slate-500); }
.voucher-value { font-weight: 900; }
.voucher-value.highlight { color: var(--rose-muted); }

.voucher-promise {
  background: rgba(255, 255, 255, 0.05);
  padding: 1.75rem;
  border-radius: 1.5rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  text-align: center;
  font-style: italic;
  color: #e2e8f0;
}

.voucher-code-block {
  margin-top: 2.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.voucher-code {
  background: var(--rose);
  color: var(--white);
  padding: 1rem 2.5rem;
  border-radius: 1rem;
  font-family: 'JetBrains Mono', 'SF Mono', monospace;
  font-size: 1.125rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  margin-bottom: 0.75rem;
}

.voucher-validity {
  color: var(--slate-500);
  font-size: 0.875rem;
  font-weight: 700;
  text-transform: uppercase;
}

.signature {
  text-align: center;
  margin-top: 2.5rem;
  color: var(--slate-400);
  font-size: 1rem;
}

/* === Particles === */
.particle-field {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 0;
}

.particle {
  position: absolute;
  opacity: 0;
  animation-name: particle-drift;
  animation-iteration-count: infinite;
  animation-timing-function: linear;
  animation-fill-mode: both;
}

.particle-glyph {
  font-size: 2.25rem;
  opacity: 0.1;
  user-select: none;
}

/* === Responsive === */
@media (min-width: 640px) {
  .fancy-card { padding: 2rem; }
  .voucher { padding: 2.5rem; }
  .character-pair { width: 16rem; height: 16rem; }
  .character-pair-row { gap: 3rem; }
  .label-long { display: block; }
  .label-short { display: none; }
}

@media (min-width: 768px) {
  .fancy-card { padding: 3rem; }
  .voucher { padding: 3.5rem; }
  .character-hero { width: 30rem; height: 30rem; }
  .character-pair { width: 20rem; height: 20rem; }
  .character-pair-row { gap: 4rem; margin-bottom: 2.5rem; }
  .title-rose { font-size: 2.25rem; }
  .title-dark { font-size: 3rem; }
  .lead { font-size: 1.5rem; }
  .choice-row { flex-direction: row; gap: 1.5rem; height: 8rem; }
  .photo { max-width: 16rem; }
}
"#;
