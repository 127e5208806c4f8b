//! Built-in stylesheet for generated pages.

const HORIZONTAL: &str = r#"
h1
{
text-align: center;
}
"#;

const VERTICAL: &str = r#"
html
{
-epub-writing-mode: vertical-rl;
writing-mode: vertical-rl;
}
"#;

const COMMON: &str = r#"
body
{
text-align: left;
line-height: 1.2;
}

h1
{
margin-top: 1em;
margin-bottom: 2em;
font-size: 1.5em;
font-weight: bold;
page-break-before: always;
}

p
{
margin: 0;
text-align: justify;
}

p.first-para
{
text-indent: 0;
}

p.separator
{
text-indent: 0;
text-align: center;
margin: 1.5em 0;
}

hr
{
margin: 1.5em 0;
}

.toc-list
{
list-style: none;
}

.toc-item
{
margin-left: 0.5em;
margin-top: 0.5em;
margin-bottom: 0.5em;
text-indent: 0;
}
"#;

/// The default stylesheet, switching writing mode for vertical books.
pub fn default_stylesheet(vertical: bool) -> String {
    let mut css = String::from("@charset \"utf-8\";\n");
    css.push_str(if vertical { VERTICAL } else { HORIZONTAL });
    css.push_str(COMMON);
    css
}
