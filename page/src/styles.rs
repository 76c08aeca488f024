//! CSS for the landing page.
//!
//! A single stylesheet shared by the browser build (injected at mount) and
//! the static export (inlined into `<head>`). Monochrome palette, one accent
//! per ecosystem branch, mobile-first with breakpoints at 640px, 768px and
//! 1024px.
//!
//! To extend or override styles:
//!
//! ```rust
//! use visiocorp_page::styles::PAGE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page.
///
/// Kept free of `<`, `>` and `&` so it survives being rendered as an escaped
/// text node inside `<style>`.
pub const PAGE_CSS: &str = r#"
:root {
    --black: #000000;
    --white: #ffffff;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --radius: 8px;
    --ease: cubic-bezier(0.4, 0, 0.2, 1);
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    font-family: Inter, system-ui, -apple-system, sans-serif;
    color: var(--gray-900);
    background: var(--white);
    -webkit-font-smoothing: antialiased;
}

::selection { background: var(--black); color: var(--white); }

a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; }
ul { list-style: none; margin: 0; padding: 0; }
h1, h2, h3, h4, p { margin: 0; }

.container { max-width: 1280px; margin: 0 auto; padding: 0 16px; }
.container-narrow { max-width: 896px; }
.container-tight { max-width: 576px; text-align: center; }

/* Navigation */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--gray-100);
}
.nav-inner { display: flex; justify-content: space-between; align-items: center; height: 80px; }
.nav-brand { font-weight: 800; font-size: 24px; letter-spacing: 0.1em; text-transform: uppercase; color: var(--black); }
.nav-links { display: none; align-items: center; gap: 32px; font-size: 14px; font-weight: 500; letter-spacing: 0.025em; }
.nav-link { color: var(--gray-500); transition: color 0.2s var(--ease); }
.nav-link:hover { color: var(--black); }
.nav-login { margin-left: 16px; color: var(--gray-900); }
.nav-menu-btn { display: flex; background: none; border: 0; padding: 4px; color: var(--gray-900); }
.nav-mobile {
    padding: 8px 16px 24px;
    background: var(--white);
    border-bottom: 1px solid var(--gray-100);
    font-weight: 500;
    animation: nav-open 0.2s var(--ease);
}
.nav-mobile-link { display: block; padding: 8px 0; color: var(--gray-600); }
.nav-mobile-link:hover { color: var(--black); }
.nav-mobile-footer { margin-top: 8px; padding-top: 16px; border-top: 1px solid var(--gray-100); }
.nav-mobile-login { display: block; font-weight: 600; color: var(--black); }
@keyframes nav-open { from { opacity: 0; max-height: 0; } to { opacity: 1; max-height: 400px; } }

/* Hero */
.hero { position: relative; padding: 128px 0 80px; overflow: hidden; background: var(--white); }
.hero-grid { display: grid; gap: 64px; align-items: center; }
.hero-content { position: relative; z-index: 10; }
.tagline { height: 32px; overflow: hidden; position: relative; }
.tagline-text {
    position: absolute;
    width: 100%;
    text-align: center;
    color: var(--gray-400);
    font-weight: 500;
    font-size: 14px;
    letter-spacing: 0.025em;
    text-transform: uppercase;
    animation: tagline-in 0.5s var(--ease);
}
@keyframes tagline-in { from { transform: translateY(20px); opacity: 0; } to { transform: translateY(0); opacity: 1; } }
.hero-title {
    margin: 16px 0 32px;
    font-size: 60px;
    font-weight: 700;
    letter-spacing: -0.05em;
    line-height: 1;
    color: var(--black);
    animation: rise 0.8s var(--ease) both;
}
.hero-title-line { display: block; }
.hero-subtitle {
    max-width: 512px;
    margin-bottom: 40px;
    font-size: 20px;
    font-weight: 300;
    line-height: 1.625;
    color: var(--gray-600);
    animation: rise 0.8s var(--ease) 0.2s both;
}
.hero-actions { display: flex; flex-direction: column; gap: 16px; animation: rise 0.8s var(--ease) 0.4s both; }
.hero-visual { position: relative; width: 100%; min-height: 320px; animation: zoom-in 1s var(--ease) 0.3s both; }
.hero-frame {
    position: absolute;
    inset: 0;
    border-radius: 16px;
    overflow: hidden;
    background: linear-gradient(to top right, var(--gray-200), var(--gray-50));
}
.hero-image { width: 100%; height: 100%; object-fit: cover; opacity: 0.8; mix-blend-mode: multiply; filter: grayscale(1); }
.hero-fade { position: absolute; inset: 0; background: linear-gradient(to top, var(--white), transparent 50%); }
@keyframes rise { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes zoom-in { from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: scale(1); } }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 16px 32px;
    border-radius: 9999px;
    font-weight: 500;
    border: 1px solid transparent;
    transition: background 0.2s var(--ease);
}
.btn-primary { background: var(--black); color: var(--white); }
.btn-primary:hover { background: var(--gray-800); }
.btn-primary:hover .btn-arrow { transform: translateX(4px); }
.btn-arrow { transition: transform 0.2s var(--ease); }
.btn-secondary { background: var(--white); color: var(--black); border-color: var(--gray-200); }
.btn-secondary:hover { background: var(--gray-50); }
.btn-dark { padding: 12px 24px; border-radius: var(--radius); background: var(--black); color: var(--white); }
.btn-dark:hover { background: var(--gray-800); }

/* Image fallback */
.image-fallback {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 100%;
    height: 100%;
    background: var(--gray-100);
    color: var(--gray-400);
}

/* Sections */
.section { padding: 96px 0; }
.section-head { text-align: center; margin-bottom: 64px; }
.section-head-split { display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 64px; }
.section-title { font-size: 36px; font-weight: 700; letter-spacing: -0.025em; color: var(--black); margin-bottom: 8px; }
.section-lead { color: var(--gray-500); max-width: 672px; margin: 0 auto; }
.section-eyebrow { color: var(--gray-400); font-weight: 500; font-size: 14px; letter-spacing: 0.1em; text-transform: uppercase; }

/* Products */
.section-products { background: var(--white); border-top: 1px solid var(--gray-100); }
.catalogue-link { display: none; align-items: center; gap: 8px; font-size: 14px; font-weight: 500; }
.catalogue-link:hover { color: var(--gray-600); }
.product-grid { display: grid; gap: 32px; }
.product-card {
    position: relative;
    display: flex;
    flex-direction: column;
    height: 100%;
    overflow: hidden;
    background: var(--white);
    border: 1px solid var(--gray-100);
    transition: border-color 0.3s var(--ease);
}
.product-card:hover { border-color: var(--gray-300); }
.badge {
    position: absolute;
    top: 16px;
    right: 16px;
    z-index: 10;
    padding: 4px 12px;
    border-radius: 9999px;
    font-size: 12px;
    font-weight: 500;
    letter-spacing: 0.025em;
    text-transform: uppercase;
}
.badge-solid { background: var(--black); color: var(--white); }
.badge-muted { background: var(--gray-100); color: var(--gray-800); }
.badge-faded { background: var(--gray-50); color: var(--gray-400); }
.product-media { height: 256px; overflow: hidden; background: var(--gray-50); }
.product-image { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s var(--ease); }
.product-card:hover .product-image { transform: scale(1.05); }
.product-body { display: flex; flex-direction: column; flex-grow: 1; padding: 32px; }
.product-title { font-size: 24px; font-weight: 700; color: var(--gray-900); margin-bottom: 4px; }
.product-subtitle { font-size: 14px; font-weight: 500; color: var(--gray-400); margin-bottom: 16px; text-transform: uppercase; letter-spacing: 0.05em; }
.product-description { flex-grow: 1; margin-bottom: 32px; line-height: 1.625; color: var(--gray-600); }
.product-explore { margin-top: auto; display: flex; align-items: center; gap: 8px; background: none; border: 0; padding: 0; font-weight: 600; color: var(--black); transition: gap 0.2s var(--ease); }
.product-card:hover .product-explore { gap: 16px; }

/* Process */
.section-process { background: var(--gray-50); border-top: 1px solid var(--gray-200); border-bottom: 1px solid var(--gray-200); }
.process-grid { position: relative; display: grid; gap: 48px; }
.process-line { display: none; position: absolute; top: 24px; left: 16%; right: 16%; height: 1px; background: var(--gray-200); z-index: 0; }
.process-step { position: relative; display: flex; align-items: flex-start; gap: 16px; }
.process-number {
    flex-shrink: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 48px;
    height: 48px;
    border-radius: 9999px;
    border: 1px solid var(--gray-200);
    background: var(--white);
    font-weight: 700;
    font-size: 18px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: border-color 0.2s var(--ease);
}
.process-step:hover .process-number { border-color: var(--black); }
.process-title { font-size: 20px; font-weight: 700; margin-bottom: 12px; }
.process-description { max-width: 320px; color: var(--gray-500); line-height: 1.625; }

/* Ecosystem */
.section-ecosystem { background: var(--black); color: var(--white); overflow: hidden; }
.section-ecosystem .section-title { color: var(--white); }
.section-ecosystem .section-lead { color: var(--gray-400); }
.eco-tree { display: flex; flex-direction: column; align-items: center; max-width: 896px; margin: 0 auto; }
.eco-root { position: relative; margin-bottom: 48px; padding: 16px 32px; border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(255, 255, 255, 0.05); border-radius: var(--radius); }
.eco-root-label { font-weight: 700; font-size: 20px; letter-spacing: 0.1em; text-transform: uppercase; }
.eco-stem { position: absolute; top: 100%; left: 50%; width: 1px; height: 48px; background: rgba(255, 255, 255, 0.2); }
.eco-branches { position: relative; display: grid; gap: 32px; width: 100%; }
.eco-connector { display: none; position: absolute; top: 0; left: 16.66%; right: 16.66%; height: 1px; background: rgba(255, 255, 255, 0.2); }
.eco-branch { display: flex; flex-direction: column; align-items: center; }
.eco-drop { display: none; width: 1px; height: 32px; margin-bottom: 16px; background: rgba(255, 255, 255, 0.2); }
.eco-card { width: 100%; padding: 24px; text-align: center; border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(255, 255, 255, 0.05); border-radius: var(--radius); transition: background 0.2s var(--ease); }
.eco-card:hover { background: rgba(255, 255, 255, 0.1); }
.eco-icon { display: flex; align-items: center; justify-content: center; width: 40px; height: 40px; margin: 0 auto 16px; border-radius: 9999px; }
.accent-blue { background: rgba(59, 130, 246, 0.2); color: #60a5fa; }
.accent-purple { background: rgba(168, 85, 247, 0.2); color: #c084fc; }
.accent-pink { background: rgba(236, 72, 153, 0.2); color: #f472b6; }
.eco-title { font-weight: 700; margin-bottom: 8px; }
.eco-items { font-size: 14px; color: var(--gray-400); line-height: 1.75; }

/* Divisions */
.section-divisions { background: var(--white); }
.section-divisions .section-title { margin-top: 8px; }
.division-list { border: 1px solid var(--gray-100); border-radius: 16px; overflow: hidden; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.division-item { display: flex; align-items: flex-start; gap: 24px; padding: 24px; border-bottom: 1px solid var(--gray-100); transition: background 0.2s var(--ease); }
.division-item:last-child { border-bottom: 0; }
.division-item:hover { background: var(--gray-50); }
.division-icon { flex-shrink: 0; display: flex; align-items: center; justify-content: center; width: 48px; height: 48px; border-radius: var(--radius); background: var(--gray-100); color: var(--gray-900); transition: background 0.2s var(--ease), color 0.2s var(--ease); }
.division-item:hover .division-icon { background: var(--black); color: var(--white); }
.division-body { flex: 1; }
.division-head { display: flex; align-items: center; gap: 12px; margin-bottom: 4px; }
.division-name { font-size: 18px; font-weight: 700; color: var(--gray-900); }
.division-status { padding: 2px 8px; border-radius: 2px; font-size: 10px; font-weight: 700; letter-spacing: 0.05em; text-transform: uppercase; background: var(--gray-200); color: var(--gray-600); }
.division-description { color: var(--gray-500); line-height: 1.625; }
.division-arrow { flex-shrink: 0; align-self: center; opacity: 0; transform: translateX(-8px); transition: opacity 0.2s var(--ease), transform 0.2s var(--ease); }
.division-item:hover .division-arrow { opacity: 1; transform: translateX(0); }

/* Newsletter */
.section-newsletter { background: var(--gray-50); border-top: 1px solid var(--gray-200); }
.newsletter-title { font-size: 24px; font-weight: 700; margin-bottom: 16px; }
.newsletter-lead { color: var(--gray-500); margin-bottom: 32px; }
.newsletter-form { display: flex; gap: 8px; }
.newsletter-input { flex: 1; padding: 12px 16px; border-radius: var(--radius); border: 1px solid var(--gray-300); font: inherit; }
.newsletter-input:focus { outline: 2px solid var(--black); border-color: transparent; }

/* Footer */
.footer { padding: 64px 0; background: var(--black); color: var(--white); border-top: 1px solid rgba(255, 255, 255, 0.1); }
.footer-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 32px; margin-bottom: 48px; }
.footer-brand { grid-column: span 2; padding-right: 32px; }
.footer-logo { display: block; margin-bottom: 24px; font-weight: 800; font-size: 24px; letter-spacing: 0.1em; text-transform: uppercase; }
.footer-blurb { max-width: 320px; font-size: 14px; line-height: 1.625; color: var(--gray-400); }
.footer-heading { margin-bottom: 16px; font-size: 12px; font-weight: 700; letter-spacing: 0.05em; text-transform: uppercase; }
.footer-list { font-size: 14px; color: var(--gray-400); line-height: 2; }
.footer-link:hover { color: var(--white); }
.footer-bottom { display: flex; flex-direction: column; justify-content: space-between; align-items: center; gap: 16px; padding-top: 32px; border-top: 1px solid rgba(255, 255, 255, 0.1); font-size: 12px; color: var(--gray-500); }
.footer-legal { display: flex; gap: 24px; }
.footer-legal-link:hover { color: var(--gray-300); }

@media (min-width: 640px) {
    .container { padding: 0 24px; }
    .hero-actions { flex-direction: row; }
}

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-menu-btn, .nav-mobile { display: none; }
    .hero-title { font-size: 72px; }
    .hero-subtitle { font-size: 24px; }
    .tagline-text { text-align: left; font-size: 16px; }
    .catalogue-link { display: flex; }
    .product-grid { grid-template-columns: repeat(2, 1fr); }
    .process-grid { grid-template-columns: repeat(3, 1fr); }
    .process-line { display: block; }
    .process-step { flex-direction: column; align-items: center; gap: 0; text-align: center; }
    .process-number { margin-bottom: 24px; }
    .process-description { margin: 0 auto; }
    .eco-branches { grid-template-columns: repeat(3, 1fr); }
    .eco-connector, .eco-drop { display: block; }
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .footer-bottom { flex-direction: row; }
}

@media (min-width: 1024px) {
    .container { padding: 0 32px; }
    .hero { padding: 192px 0 128px; }
    .hero-grid { grid-template-columns: repeat(2, 1fr); }
    .hero-title { font-size: 96px; }
    .hero-visual { height: 600px; }
    .product-grid { grid-template-columns: repeat(3, 1fr); }
    .footer-grid { grid-template-columns: repeat(5, 1fr); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_has_no_characters_escaped_in_text_nodes() {
        assert!(!PAGE_CSS.contains('<'));
        assert!(!PAGE_CSS.contains('>'));
        assert!(!PAGE_CSS.contains('&'));
    }

    #[test]
    fn css_styles_every_badge_variant() {
        for class in ["badge-solid", "badge-muted", "badge-faded"] {
            assert!(PAGE_CSS.contains(class), "missing .{class}");
        }
    }
}
