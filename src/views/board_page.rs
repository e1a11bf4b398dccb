use std::fmt::Write;

use crate::{
    controller::page_controller::PollStatus,
    types::board_view::{BoardView, Timetable},
};

/// Text from the API goes into the page as text, never as markup.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_timetable(body: &mut String, timetable: &Timetable) {
    let _ = write!(
        body,
        "<section id=\"timetable\"><h2>Linea {}</h2>",
        escape_html(&timetable.line)
    );
    for block in &timetable.blocks {
        let _ = write!(body, "<h3>{}</h3><p>", escape_html(&block.direction));
        let times = block
            .times
            .iter()
            .map(|t| escape_html(t))
            .collect::<Vec<String>>()
            .join(" ");
        body.push_str(&times);
        body.push_str("</p>");
    }
    body.push_str("</section>");
}

pub fn render_board_page(
    view: &BoardView,
    poll: Option<&PollStatus>,
    last_code: Option<&str>,
) -> String {
    let mut body = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    if let Some(poll) = poll {
        let seconds = poll.period.as_secs_f64().ceil().max(1.0) as u64;
        let _ = write!(body, "<meta http-equiv=\"refresh\" content=\"{}\">", seconds);
    }
    body.push_str("<title>AMT Genova</title></head><body>");

    let _ = write!(
        body,
        "<form id=\"form_code\" method=\"post\" action=\"/stop\">\
         <input id=\"code\" name=\"code\" type=\"text\" required value=\"{}\">\
         <button type=\"submit\">Cerca</button></form>",
        escape_html(last_code.unwrap_or_default())
    );

    let current_period = poll
        .map(|p| p.period.as_secs_f64().to_string())
        .unwrap_or_default();
    let _ = write!(
        body,
        "<form id=\"time_form\" method=\"post\" action=\"/interval\">\
         <input id=\"time\" name=\"time\" type=\"number\" min=\"0.001\" step=\"any\" required value=\"{}\">\
         <button type=\"submit\">Aggiorna</button></form>",
        current_period
    );

    body.push_str(
        "<form id=\"line_form\" method=\"post\" action=\"/line\">\
         <input id=\"line\" name=\"line\" type=\"text\" required>\
         <button type=\"submit\">Orari</button></form>",
    );

    let _ = write!(body, "<h1 id=\"name\">{}</h1>", escape_html(&view.name));
    if let Some(updated_at) = view.updated_at {
        let _ = write!(
            body,
            "<p id=\"updated\">{}</p>",
            updated_at.format("%H:%M:%S")
        );
    }

    body.push_str(
        "<table><thead><tr><th>Linea</th><th>Destinazione</th><th>Orario</th><th>Attesa</th></tr></thead>\
         <tbody id=\"stops\">",
    );
    for row in &view.rows {
        body.push_str("<tr>");
        for cell in row.cells() {
            let _ = write!(body, "<td>{}</td>", escape_html(cell));
        }
        body.push_str("</tr>");
    }
    body.push_str("</tbody></table>");

    if let Some(timetable) = &view.timetable {
        render_timetable(&mut body, timetable);
    }

    body.push_str("</body></html>");
    body
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::types::board_view::{ArrivalRow, TimetableBlock};

    use super::*;

    fn row(line: &str, dest: &str) -> ArrivalRow {
        ArrivalRow {
            line: line.to_string(),
            dest: dest.to_string(),
            time: "08:15".to_string(),
            eta: "4'".to_string(),
        }
    }

    #[test]
    fn renders_one_row_per_arrival() {
        let view = BoardView {
            name: "BRIGNOLE".to_string(),
            rows: vec![row("13", "CAMPI"), row("37", "STAZIONE FS")],
            ..Default::default()
        };

        let page = render_board_page(&view, None, Some("0458"));

        assert!(page.contains("<h1 id=\"name\">BRIGNOLE</h1>"));
        assert!(page.contains(
            "<tbody id=\"stops\"><tr><td>13</td><td>CAMPI</td><td>08:15</td><td>4&#39;</td></tr>\
             <tr><td>37</td><td>STAZIONE FS</td><td>08:15</td><td>4&#39;</td></tr></tbody>"
        ));
        assert!(page.contains("value=\"0458\""));
        assert!(!page.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn escapes_server_text() {
        let view = BoardView {
            name: "<script>alert(1)</script>".to_string(),
            rows: vec![row("1", "A & B")],
            ..Default::default()
        };

        let page = render_board_page(&view, None, None);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("<td>A &amp; B</td>"));
    }

    #[test]
    fn active_polling_refreshes_page() {
        let poll = PollStatus {
            code: "0458".to_string(),
            period: Duration::from_millis(2500),
        };

        let page = render_board_page(&BoardView::default(), Some(&poll), Some("0458"));

        assert!(page.contains("<meta http-equiv=\"refresh\" content=\"3\">"));
        assert!(page.contains("name=\"time\" type=\"number\" min=\"0.001\" step=\"any\" required value=\"2.5\""));
    }

    #[test]
    fn renders_timetable_blocks() {
        let view = BoardView {
            timetable: Some(Timetable {
                line: "18".to_string(),
                blocks: vec![TimetableBlock {
                    direction: "PRINCIPE".to_string(),
                    times: vec!["05:30".to_string(), "05:50".to_string()],
                }],
            }),
            ..Default::default()
        };

        let page = render_board_page(&view, None, None);

        assert!(page.contains("<h2>Linea 18</h2><h3>PRINCIPE</h3><p>05:30 05:50</p>"));
    }
}
