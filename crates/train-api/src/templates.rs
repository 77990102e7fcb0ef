//! Server-rendered HTML pages.
//!
//! Every page shares one shell: the floating "trAIn" title above a single
//! content card. User-supplied text is escaped before it is interpolated.

use train_models::{CognitiveLoad, TaskComplexity, TaskSetting};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>trAIn</title>
    <meta charset="utf-8">
    <link href="https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;600&display=swap" rel="stylesheet">
    <style>
        body {
            font-family: 'Space Grotesk', 'Helvetica', 'Arial', sans-serif;
            margin: 0;
            padding: 0;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            background: linear-gradient(135deg, #1f2b38, #223944, #2f5556, #37424a);
            color: #f0f0f0;
        }
        .title {
            font-size: 120px;
            letter-spacing: 4px;
            font-weight: 900;
            margin: 80px 0 30px 0;
            display: flex;
            justify-content: center;
            gap: 14px;
        }
        .letter {
            display: inline-block;
            animation: floatLetter 3.2s ease-in-out infinite;
        }
        .letter:nth-child(1) { animation-delay: 0s; }
        .letter:nth-child(2) { animation-delay: 0.3s; }
        .letter:nth-child(3) { animation-delay: 0.6s; }
        .letter:nth-child(4) { animation-delay: 0.9s; }
        .letter:nth-child(5) { animation-delay: 1.2s; }
        .ai { color: #ffb74d; }
        @keyframes floatLetter {
            0%,100% { transform: translateY(0px); }
            50% { transform: translateY(-10px); }
        }
        .container {
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(12px);
            border-radius: 24px;
            padding: 70px;
            max-width: 720px;
            width: 90%;
            text-align: center;
            box-shadow: 0 10px 30px rgba(0,0,0,0.3);
            margin-bottom: 40px;
        }
        h2 { color: #f8f8f8; margin-bottom: 25px; font-weight: 600; }
        p { font-size: 17px; line-height: 1.8; margin-bottom: 20px; }
        video {
            border-radius: 14px;
            max-width: 100%;
            margin: 25px 0;
            box-shadow: 0 6px 20px rgba(0,0,0,0.25);
        }
        select {
            padding: 14px;
            border-radius: 14px;
            width: 100%;
            font-size: 16px;
        }
        input[type="text"] {
            width: 100%;
            padding: 16px;
            margin: 15px 0;
            border-radius: 14px;
            border: none;
            font-size: 16px;
        }
        input[type="submit"], a.button {
            background: linear-gradient(135deg, #a35f7d, #ff914d);
            color: white;
            padding: 16px 32px;
            border: none;
            border-radius: 14px;
            cursor: pointer;
            font-size: 16px;
            text-decoration: none;
            transition: 0.3s;
        }
        input[type="submit"]:hover, a.button:hover { filter: brightness(1.2); }
        .actions {
            margin-top: 25px;
            display: flex;
            justify-content: center;
            gap: 20px;
            flex-wrap: wrap;
        }
        form { margin-top: 20px; }
    </style>
</head>
<body>
    <div class="title">
        <span class="letter">t</span>
        <span class="letter">r</span>
        <span class="letter ai">A</span>
        <span class="letter ai">I</span>
        <span class="letter">n</span>
    </div>
    <div class="container">
"#;

const PAGE_TAIL: &str = r#"
    </div>
</body>
</html>
"#;

const BACK_LINK: &str = r#"<a class="button" href="/">Go back</a>"#;

/// Wrap `body` in the shared page shell.
pub fn page(body: &str) -> String {
    let mut html = String::with_capacity(PAGE_HEAD.len() + body.len() + PAGE_TAIL.len());
    html.push_str(PAGE_HEAD);
    html.push_str(body);
    html.push_str(PAGE_TAIL);
    html
}

/// Escape text for element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn options<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels
        .into_iter()
        .map(|label| {
            let label = escape_html(label);
            format!("<option value=\"{label}\">{label}</option>")
        })
        .collect()
}

/// Landing page: one `<select>` per selection category.
pub fn selection_page() -> String {
    let body = format!(
        r#"
        <form action="/generate_scenario" method="post">
            <h2>Task Setting</h2>
            <select name="task_setting">{}</select>
            <br><br>
            <h2>Task Complexity</h2>
            <select name="task_complexity">{}</select>
            <br><br>
            <h2>Cognitive Load / Multiple Actors</h2>
            <select name="cognitive_load">{}</select>
            <br><br><br>
            <input type="submit" value="Generate Scenario">
        </form>
"#,
        options(TaskSetting::ALL.iter().map(|v| v.label())),
        options(TaskComplexity::ALL.iter().map(|v| v.label())),
        options(CognitiveLoad::ALL.iter().map(|v| v.label())),
    );
    page(&body)
}

/// Scenario result: the prompt, the clip, and the follow-up action form.
pub fn scenario_page(prompt: &str) -> String {
    let body = format!(
        r#"
        <h2>Generated Scenario:</h2>
        <p><b>{}</b></p>
        <video controls>
            <source src="/scenario_video" type="video/mp4">
        </video>
        <form action="/generate_user_action" method="post">
            <label for="action">What would you do next?</label><br>
            <input type="text" id="action" name="action" placeholder="Describe your action" required><br>
            <input type="submit" value="Submit">
        </form>
        <div class="actions">
            {BACK_LINK}
        </div>
"#,
        escape_html(prompt)
    );
    page(&body)
}

/// Action result: the previous scenario, the user's action, and the stitched clip.
pub fn action_page(previous: &str, action: &str) -> String {
    let body = format!(
        r#"
        <h2>Previous Scenario:</h2>
        <p><b>{}</b></p>
        <h2>Your Action:</h2>
        <p><b>{}</b></p>
        <video controls>
            <source src="/final_video" type="video/mp4">
        </video>
        <div class="actions">
            {BACK_LINK}
            <a class="button" href="/">Generate new scenario</a>
        </div>
"#,
        escape_html(previous),
        escape_html(action)
    );
    page(&body)
}

/// Error page with a plain message.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"
        <p>{}</p>
        <div class="actions">
            {BACK_LINK}
        </div>
"#,
        escape_html(message)
    );
    page(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#x27;y&#x27;"
        );
        assert_eq!(escape_html("Hazardous - Height / elevated"), "Hazardous - Height / elevated");
    }

    #[test]
    fn test_selection_page_lists_every_option() {
        let html = selection_page();
        let count = html.matches("<option ").count();
        assert_eq!(
            count,
            TaskSetting::ALL.len() + TaskComplexity::ALL.len() + CognitiveLoad::ALL.len()
        );
        assert!(html.contains(r#"<option value="Poor historian (language barrier)">"#));
        assert!(html.contains(r#"name="cognitive_load""#));
    }

    #[test]
    fn test_action_page_escapes_user_text() {
        let html = action_page("Previous scenario", "<b>push</b>");
        assert!(html.contains("&lt;b&gt;push&lt;/b&gt;"));
        assert!(!html.contains("<b>push</b>"));
        assert!(html.contains(r#"src="/final_video""#));
    }

    #[test]
    fn test_pages_share_shell() {
        for html in [selection_page(), scenario_page("p"), error_page("oops")] {
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("<title>trAIn</title>"));
        }
    }
}
