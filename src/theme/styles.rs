//! Global CSS styles for the Learner's Point site.
//!
//! Component code only references class names; every visual rule lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --blue: #2563EB;
  --blue-dark: #1D4ED8;
  --indigo: #4F46E5;

  /* SURFACES */
  --surface: #FFFFFF;
  --surface-alt: #F8FAFC;
  --border: #E2E8F0;

  /* TEXT */
  --text-primary: #0F172A;
  --text-secondary: #475569;

  /* SEMANTIC */
  --success: #16A34A;
  --danger: #DC2626;
  --amber: #D97706;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Poppins', 'Inter', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body, #main {
  height: 100%;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  max-width: 100%;
  display: block;
}

/* === Shell and Theme === */
.site-root {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
  background: var(--surface);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.site-root.theme-dark {
  --surface: #0F172A;
  --surface-alt: #1E293B;
  --border: #334155;
  --text-primary: #F1F5F9;
  --text-secondary: #CBD5E1;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section {
  padding: 5rem 0;
}

.section-alt {
  background: var(--surface-alt);
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 0.75rem;
}

.section-subtitle {
  color: var(--text-secondary);
  text-align: center;
  max-width: 640px;
  margin: 0 auto 3rem;
}

.accent {
  color: var(--blue);
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost, .btn-nav {
  font: inherit;
  cursor: pointer;
  border-radius: 0.5rem;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: linear-gradient(90deg, var(--blue), var(--indigo));
  color: #FFFFFF;
  border: none;
  padding: 0.75rem 1.5rem;
  font-weight: 600;
  box-shadow: 0 4px 14px rgba(37, 99, 235, 0.3);
}

.btn-primary:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: 0 8px 20px rgba(37, 99, 235, 0.4);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: wait;
}

.btn-outline {
  background: transparent;
  color: var(--blue);
  border: 2px solid var(--blue);
  padding: 0.65rem 1.4rem;
  font-weight: 600;
}

.btn-outline:hover {
  background: var(--blue);
  color: #FFFFFF;
}

.btn-ghost {
  background: none;
  border: none;
  color: var(--blue);
  font-weight: 600;
  padding: 0.25rem 0;
}

.btn-nav {
  background: none;
  border: none;
  color: var(--text-primary);
  padding: 0.5rem 0.75rem;
  font-weight: 500;
}

.btn-nav:hover, .btn-nav.active {
  color: var(--blue);
}

.icon-btn {
  background: rgba(15, 23, 42, 0.55);
  color: #FFFFFF;
  border: none;
  border-radius: 9999px;
  width: 2.5rem;
  height: 2.5rem;
  cursor: pointer;
  font-size: var(--text-lg);
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.icon-btn:hover {
  background: var(--blue);
}

.close-btn {
  background: transparent;
  font-size: var(--text-xl);
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

.input-required {
  color: var(--danger);
}

.input-field {
  font: inherit;
  padding: 0.7rem 0.9rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--surface);
  color: var(--text-primary);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--blue);
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.2);
}

.textarea {
  resize: vertical;
}

/* === Notices === */
.notice {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.9rem 1.1rem;
  border-radius: 0.5rem;
  margin-bottom: 1.25rem;
  animation: fade-in var(--transition-normal);
}

.notice-success { background: #DCFCE7; color: #166534; }
.notice-error { background: #FEE2E2; color: #991B1B; }
.notice-info { background: #DBEAFE; color: #1E40AF; }

.notice-message { flex: 1; }

.notice-dismiss {
  background: none;
  border: none;
  font-size: var(--text-lg);
  cursor: pointer;
  color: inherit;
}

/* === Progress Bars === */
.progress { width: 100%; }

.progress-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  margin-bottom: 0.25rem;
}

.progress-track {
  height: 0.6rem;
  background: var(--border);
  border-radius: 9999px;
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--blue), var(--indigo));
  border-radius: 9999px;
  transition: width var(--transition-slow);
}

/* === Loading Screen === */
.loading-screen {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  background: linear-gradient(135deg, #EFF6FF, #EEF2FF);
}

.loading-logo {
  width: 96px;
  height: 96px;
  border-radius: 9999px;
  animation: pulse 1.6s ease-in-out infinite;
}

.loading-brand {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--blue);
}

.loading-bar {
  width: min(320px, 80vw);
}

.loading-percent {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.loading-message {
  font-style: italic;
  color: var(--text-secondary);
  animation: fade-in var(--transition-normal);
}

/* === Nav Bar === */
.nav-bar {
  position: sticky;
  top: 0;
  z-index: 50;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.nav-bar.scrolled {
  background: var(--surface);
  box-shadow: 0 2px 12px rgba(15, 23, 42, 0.08);
}

.nav-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4.5rem;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  font-family: var(--font-display);
  font-weight: 700;
  font-size: var(--text-lg);
}

.nav-brand img {
  width: 40px;
  height: 40px;
  border-radius: 9999px;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-toggle {
  display: none;
  background: none;
  border: none;
  font-size: var(--text-xl);
  cursor: pointer;
  color: var(--text-primary);
}

.nav-mobile {
  display: none;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .nav-toggle { display: block; }
  .nav-mobile.open {
    display: flex;
    flex-direction: column;
    padding: 0.5rem 1.5rem 1rem;
    background: var(--surface);
    box-shadow: 0 8px 12px rgba(15, 23, 42, 0.08);
  }
}

/* === Hero === */
.hero {
  padding: 4rem 0 5rem;
  background: linear-gradient(135deg, #EFF6FF 0%, #EEF2FF 50%, var(--surface) 100%);
}

.theme-dark .hero {
  background: linear-gradient(135deg, #1E293B 0%, #0F172A 100%);
}

.hero-grid {
  display: grid;
  grid-template-columns: 1.1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.hero-heading {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  line-height: 1.15;
  font-weight: 800;
}

.typewriter {
  display: block;
  min-height: 1.2em;
  color: var(--blue);
}

.typewriter-cursor {
  display: inline-block;
  width: 3px;
  height: 1em;
  margin-left: 2px;
  background: currentColor;
  vertical-align: -0.1em;
  animation: blink 1s step-end infinite;
}

.hero-blurb {
  color: var(--text-secondary);
  font-size: var(--text-lg);
  margin: 1.25rem 0 2rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}

.hero-visual {
  position: relative;
}

.hero-visual img {
  border-radius: 1.5rem;
  box-shadow: 0 20px 40px rgba(15, 23, 42, 0.15);
}

.hero-stat {
  position: absolute;
  background: var(--surface);
  border-radius: 0.75rem;
  padding: 0.6rem 1rem;
  box-shadow: 0 10px 24px rgba(15, 23, 42, 0.12);
  animation: float 4s ease-in-out infinite;
}

.hero-stat:nth-child(2) { top: 8%; left: -6%; }
.hero-stat:nth-child(3) { bottom: 10%; right: -4%; animation-delay: 1s; }
.hero-stat:nth-child(4) { bottom: -4%; left: 20%; animation-delay: 2s; }

.hero-stat-value {
  font-weight: 800;
  color: var(--blue);
  font-size: var(--text-lg);
}

.hero-stat-label {
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

@media (max-width: 900px) {
  .hero-grid { grid-template-columns: 1fr; }
  .hero-heading { font-size: var(--text-2xl); }
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 80;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  animation: fade-in var(--transition-normal);
}

.modal {
  background: var(--surface);
  border-radius: 1rem;
  overflow: hidden;
  width: min(900px, 100%);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 1.25rem;
  color: #FFFFFF;
  background: linear-gradient(90deg, var(--blue), var(--indigo));
}

.modal-body {
  aspect-ratio: 16 / 9;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  color: var(--text-secondary);
  background: var(--surface-alt);
}

.modal-icon {
  font-size: var(--text-3xl);
}

/* === Cards (services and features) === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.75rem;
}

.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 1rem;
  overflow: hidden;
  box-shadow: 0 6px 18px rgba(15, 23, 42, 0.06);
  opacity: 0;
  transition: opacity var(--transition-slow), transform var(--transition-slow), box-shadow var(--transition-normal);
}

.card.revealed {
  opacity: 1;
  transform: none;
}

.card:hover {
  box-shadow: 0 16px 32px rgba(15, 23, 42, 0.12);
}

.card-image {
  overflow: hidden;
  height: 180px;
}

.card-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow), filter var(--transition-slow);
}

.card-body {
  padding: 1.25rem 1.5rem 1.5rem;
}

.card-title {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 700;
  margin-bottom: 0.5rem;
  transition: color var(--transition-normal);
}

.card-summary {
  color: var(--text-secondary);
}

.card-details {
  color: var(--text-secondary);
  margin-top: 0.75rem;
  animation: expand-in var(--transition-normal);
}

.present-zoom, .present-rotate, .present-slide, .present-morph {
  border-top: 4px solid var(--card-accent);
}

/* === Gallery === */
.gallery-headline {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
}

.headline-word {
  display: inline-block;
  color: var(--blue);
  animation: fade-in var(--transition-normal);
}

.carousel {
  position: relative;
  border-radius: 1.25rem;
  overflow: hidden;
  outline: none;
  user-select: none;
  background: #000000;
  margin-top: 2rem;
}

.carousel.fullscreen {
  position: fixed;
  inset: 0;
  z-index: 90;
  border-radius: 0;
  margin: 0;
}

.carousel-stage {
  position: relative;
  aspect-ratio: 16 / 9;
  overflow: hidden;
}

.carousel.fullscreen .carousel-stage {
  aspect-ratio: auto;
  height: 100%;
}

.carousel-slide {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.slide-from-right { animation: slide-from-right var(--transition-slow); }
.slide-from-left { animation: slide-from-left var(--transition-slow); }
.slide-still { animation: fade-in var(--transition-slow); }

.carousel-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 2rem 1.5rem 1.25rem;
  color: #FFFFFF;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.75));
}

.carousel-caption h3 {
  font-size: var(--text-xl);
}

.carousel-prev, .carousel-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.carousel-prev { left: 1rem; }
.carousel-next { right: 1rem; }

.carousel-toolbar {
  position: absolute;
  top: 1rem;
  right: 1rem;
  display: flex;
  gap: 0.5rem;
  align-items: center;
}

.carousel-counter {
  background: rgba(15, 23, 42, 0.55);
  color: #FFFFFF;
  border-radius: 9999px;
  padding: 0.25rem 0.75rem;
  font-size: var(--text-sm);
}

.carousel-dots {
  position: absolute;
  bottom: 0.75rem;
  right: 1.5rem;
  display: flex;
  gap: 0.4rem;
}

.carousel-dot {
  width: 0.6rem;
  height: 0.6rem;
  border-radius: 9999px;
  border: none;
  cursor: pointer;
  background: rgba(255, 255, 255, 0.5);
}

.carousel-dot.active {
  background: #FFFFFF;
  width: 1.5rem;
}

.thumbnails {
  display: flex;
  gap: 0.75rem;
  margin-top: 1rem;
  overflow-x: auto;
}

.thumbnail {
  flex: 0 0 120px;
  height: 72px;
  border-radius: 0.5rem;
  overflow: hidden;
  border: 3px solid transparent;
  opacity: 0.6;
  cursor: pointer;
  padding: 0;
  background: none;
}

.thumbnail.active {
  border-color: var(--blue);
  opacity: 1;
}

.thumbnail img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 1.25rem;
  margin-top: 3rem;
}

.stat-tile {
  text-align: center;
  padding: 1.5rem 1rem;
  background: var(--surface);
  border-radius: 1rem;
  box-shadow: 0 6px 18px rgba(15, 23, 42, 0.06);
  opacity: 0;
  transform: translateY(20px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.stat-tile.revealed {
  opacity: 1;
  transform: none;
}

.stat-value {
  font-size: var(--text-2xl);
  font-weight: 800;
  color: var(--blue);
}

.stat-label {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.chart {
  margin-top: 3rem;
  padding: 1.5rem;
  background: var(--surface);
  border-radius: 1rem;
  box-shadow: 0 6px 18px rgba(15, 23, 42, 0.06);
}

.chart-title {
  font-weight: 700;
  margin-bottom: 1rem;
}

.chart-row {
  display: grid;
  grid-template-columns: 3rem 1fr 1fr;
  gap: 1rem;
  align-items: center;
  margin-bottom: 0.75rem;
}

.chart-month {
  font-weight: 600;
  color: var(--text-secondary);
}

/* === Contact Section === */
.contact-intro {
  min-height: 3.2em;
  text-align: center;
  color: var(--text-secondary);
  max-width: 720px;
  margin: 0 auto 2.5rem;
}

.programs-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.25rem;
  margin-bottom: 3rem;
}

.program-card {
  padding: 1.5rem;
  border-radius: 1rem;
  border: 1px solid var(--border);
  background: var(--surface);
}

.program-subtitle {
  color: var(--blue);
  font-weight: 600;
  font-size: var(--text-sm);
}

.program-duration {
  display: inline-block;
  margin-top: 0.75rem;
  padding: 0.15rem 0.6rem;
  border-radius: 9999px;
  background: #DBEAFE;
  color: var(--blue-dark);
  font-size: var(--text-xs);
  font-weight: 600;
}

.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.2fr;
  gap: 2.5rem;
}

.contact-details {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.contact-item-label {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-secondary);
}

.email-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.copy-button {
  font: inherit;
  font-size: var(--text-xs);
  padding: 0.2rem 0.6rem;
  border-radius: 0.375rem;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
}

.copy-button.copied {
  border-color: var(--success);
  color: var(--success);
}

.form-card {
  padding: 2rem;
  border-radius: 1rem;
  background: var(--surface);
  box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
}

@media (max-width: 900px) {
  .contact-grid { grid-template-columns: 1fr; }
}

/* === Enroll Page === */
.enroll-page {
  min-height: 100%;
  padding: 3rem 0 5rem;
}

.enroll-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 2rem;
}

.enroll-grid {
  display: grid;
  grid-template-columns: 1.3fr 1fr;
  gap: 2.5rem;
}

.form-switch {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.form-switch .btn-nav {
  border-bottom: 2px solid transparent;
  border-radius: 0;
}

.form-switch .btn-nav.active {
  border-bottom-color: var(--blue);
}

.payment-panel {
  text-align: center;
}

.upi-id {
  font-family: monospace;
  font-size: var(--text-lg);
  margin: 1rem 0;
}

.map-frame {
  width: 100%;
  height: 280px;
  border: 0;
  border-radius: 1rem;
}

@media (max-width: 900px) {
  .enroll-grid { grid-template-columns: 1fr; }
}

/* === Footer === */
.footer {
  background: #0F172A;
  color: #CBD5E1;
  padding: 4rem 0 2rem;
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 2rem;
}

.footer h4 {
  color: #FFFFFF;
  margin-bottom: 1rem;
}

.footer li {
  list-style: none;
  margin-bottom: 0.5rem;
}

.footer a:hover, .footer .btn-ghost:hover {
  color: #FFFFFF;
}

.footer .btn-ghost {
  color: #CBD5E1;
  font-weight: 400;
}

.event-date {
  font-size: var(--text-xs);
  color: #94A3B8;
}

.newsletter {
  display: flex;
  gap: 0.5rem;
}

.newsletter .form-field {
  flex: 1;
  margin: 0;
}

.footer-bottom {
  border-top: 1px solid #1E293B;
  margin-top: 3rem;
  padding-top: 1.5rem;
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
  font-size: var(--text-sm);
}

/* === Keyframes === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-from-right {
  from { transform: translateX(100%); opacity: 0.4; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes slide-from-left {
  from { transform: translateX(-100%); opacity: 0.4; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes expand-in {
  from { opacity: 0; transform: var(--expand-from); }
  to { opacity: 1; transform: none; }
}

@keyframes blink {
  50% { opacity: 0; }
}

@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.08); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}
"#;
