//! Proficiency report page.
//!
//! A self-contained HTML file with CSS and JS inlined. The page carries the
//! student id as a literal and builds its table in the browser from a fresh
//! copy of the proficiency dataset.

use studentpages_core::grid::{CellStatus, ORDERED_TOPICS};
use studentpages_core::model::Difficulty;

use crate::escape::{html_escape, script_literal};

/// Inputs for one report page.
#[derive(Debug, Clone)]
pub struct ReportPage<'a> {
    pub student_id: &'a str,
    pub proficiency_url: &'a str,
    /// File name of the paired practice page, relative to the report.
    pub practice_file: &'a str,
}

/// Render the report page for one student.
pub fn render_report_page(page: &ReportPage<'_>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\" />\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
    );
    html.push_str(&format!(
        "  <title>Student Proficiency Report - {}</title>\n",
        html_escape(page.student_id)
    ));
    html.push_str("  <style>");
    html.push_str(CSS);
    html.push_str("  </style>\n</head>\n<body>\n");

    html.push_str("  <div class=\"container\">\n");
    html.push_str("    <h1 class=\"title\">Python Proficiency Overview</h1>\n");
    html.push_str("    <p><strong>Student ID:</strong> <span id=\"student-id\"></span></p>\n");
    html.push_str("    <p><strong>Name:</strong> <span id=\"student-name\"></span></p>\n");
    html.push_str("    <table>\n      <thead>\n        <tr>\n          <th>Concept Name</th>\n");
    for difficulty in Difficulty::ALL {
        html.push_str(&format!("          <th>{}</th>\n", difficulty.label()));
    }
    html.push_str("        </tr>\n      </thead>\n");
    html.push_str("      <tbody id=\"report-body\"></tbody>\n    </table>\n");
    html.push_str("    <br>\n");
    html.push_str(
        "    <button onclick=\"redirectToPractice()\">View Recommended Questions</button>\n",
    );
    html.push_str("  </div>\n");

    html.push_str("  <script>\n");
    html.push_str(&format!(
        "    const studentId = {};\n",
        script_literal(page.student_id)
    ));
    html.push_str(&format!(
        "    const proficiencyUrl = {};\n",
        script_literal(page.proficiency_url)
    ));
    html.push_str(&format!(
        "    const practicePage = {};\n",
        script_literal(page.practice_file)
    ));
    html.push_str(&format!(
        "    const orderedTopics = {};\n",
        script_literal(&ORDERED_TOPICS)
    ));
    html.push_str(&format!(
        "    const STATUS = {{ pass: {}, fail: {}, none: {} }};\n",
        script_literal(CellStatus::Passed.symbol()),
        script_literal(CellStatus::Failed.symbol()),
        script_literal(CellStatus::NoData.symbol()),
    ));
    html.push_str(JS);
    html.push_str("  </script>\n");

    html.push_str("</body>\n</html>");
    html
}

const CSS: &str = r#"
    body { font-family: Arial, sans-serif; margin: 20px; background-color: #f9f9f9; text-align: center; }
    .container { max-width: 800px; margin: auto; background: white; padding: 20px; border-radius: 10px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
    .title { font-size: 24px; font-weight: bold; color: #007BFF; margin-bottom: 20px; }
    table { width: 100%; border-collapse: collapse; margin-top: 20px; text-align: center; }
    th, td { border: 1px solid #ddd; padding: 10px; }
    th { background-color: #007BFF; color: white; }
    .green { color: green; font-size: 20px; }
    .red { color: red; font-size: 20px; }
    .neutral { color: #777; font-size: 20px; }
    button { background-color: #007BFF; color: white; border: none; padding: 10px 20px; font-size: 16px; cursor: pointer; border-radius: 5px; }
    button:hover { background-color: #0056b3; }
"#;

const JS: &str = r#"
    async function fetchProficiencyData() {
      try {
        const response = await fetch(proficiencyUrl);
        if (!response.ok) throw new Error("HTTP error " + response.status);
        return await response.json();
      } catch (error) {
        console.error('Error fetching proficiency data:', error);
        alert("Error fetching student data. Please try again later.");
        return [];
      }
    }

    // Numbers are fractions; text has its '%' removed and is parsed as a float.
    function derivePercentage(raw) {
      return typeof raw === "number"
        ? raw
        : parseFloat(String(raw).replace('%', '')) || 0;
    }

    function statusClass(status) {
      if (status === STATUS.none) return 'neutral';
      return status === STATUS.pass ? 'green' : 'red';
    }

    async function loadStudentData() {
      document.getElementById("student-id").innerText = studentId;
      const proficiencyData = await fetchProficiencyData();
      if (!proficiencyData.length) {
        alert("No student data found.");
        return;
      }
      const studentRecords = proficiencyData.filter(
        s => s.niat_id != null && String(s.niat_id).trim() === studentId
      );
      if (studentRecords.length) {
        document.getElementById("student-name").innerText = studentRecords[0].student_name || "";
      } else {
        alert("Student not found.");
      }

      const proficiencyMap = {};
      studentRecords.forEach(record => {
        if (!proficiencyMap[record.sub_topic]) {
          proficiencyMap[record.sub_topic] = { easy: STATUS.none, medium: STATUS.none, hard: STATUS.none };
        }
        const percentage = derivePercentage(record.percentage_of_questions_solved);
        const status = (percentage * 100) >= 50 ? STATUS.pass : STATUS.fail;
        if (record.difficulty === "EASY") proficiencyMap[record.sub_topic].easy = status;
        if (record.difficulty === "MEDIUM") proficiencyMap[record.sub_topic].medium = status;
        if (record.difficulty === "HARD") proficiencyMap[record.sub_topic].hard = status;
      });

      const reportBody = document.getElementById("report-body");
      orderedTopics.forEach(concept => {
        const cells = proficiencyMap[concept] || { easy: STATUS.none, medium: STATUS.none, hard: STATUS.none };
        const row = document.createElement("tr");
        const name = document.createElement("td");
        name.textContent = concept;
        row.appendChild(name);
        [cells.easy, cells.medium, cells.hard].forEach(status => {
          const td = document.createElement("td");
          td.className = statusClass(status);
          td.textContent = status;
          row.appendChild(td);
        });
        reportBody.appendChild(row);
      });
    }

    function redirectToPractice() {
      window.location.href = encodeURIComponent(practicePage);
    }

    loadStudentData();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn page(student_id: &str) -> String {
        render_report_page(&ReportPage {
            student_id,
            proficiency_url: "https://data.test/proficiency.json",
            practice_file: "practice_questions-S1.html",
        })
    }

    #[test]
    fn report_page_contains_required_elements() {
        let html = page("S1");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<title>Student Proficiency Report - S1</title>"));
        assert!(html.contains(r#"const studentId = "S1";"#));
        assert!(html.contains(r#"const proficiencyUrl = "https://data.test/proficiency.json";"#));
        assert!(html.contains(r#"const practicePage = "practice_questions-S1.html";"#));
        assert!(html.contains("View Recommended Questions"));
        for heading in ["<th>Easy</th>", "<th>Medium</th>", "<th>Hard</th>"] {
            assert!(html.contains(heading));
        }
    }

    #[test]
    fn all_topics_are_embedded_in_order() {
        let html = page("S1");
        let expected = format!("const orderedTopics = {};", script_literal(&ORDERED_TOPICS));
        assert!(html.contains(&expected));
        assert!(expected.starts_with(r#"const orderedTopics = ["IO_BASICS","OPERATORS""#));
        assert!(expected.ends_with(r#""DATA_TYPE_DICTIONARY"];"#));
    }

    #[test]
    fn status_symbols_and_threshold_are_embedded() {
        let html = page("S1");
        assert!(html.contains(r#"const STATUS = { pass: "✅", fail: "❌", none: "-" };"#));
        assert!(html.contains("(percentage * 100) >= 50"));
    }

    #[test]
    fn unknown_student_alerts_and_still_renders_every_topic() {
        let html = page("S404");
        assert!(html.contains(r#"alert("Student not found.");"#));
        assert!(html.contains("orderedTopics.forEach(concept =>"));
        let alert_at = html.find("Student not found.").unwrap();
        let rows_at = html.find("orderedTopics.forEach(concept =>").unwrap();
        assert!(alert_at < rows_at);
    }

    #[test]
    fn practice_link_is_url_encoded() {
        let html = page("S1");
        assert!(html.contains("window.location.href = encodeURIComponent(practicePage);"));
    }

    #[test]
    fn hostile_id_is_escaped() {
        let html = page(r#"<S1>"</script>"#);
        assert!(html.contains("<title>Student Proficiency Report - &lt;S1&gt;&quot;&lt;/script&gt;</title>"));
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
