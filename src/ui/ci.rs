use branding_check::EnvironmentReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_workflow_command_value(file)));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_workflow_command_value(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_message(message)
    )
}

/// One error annotation per missing file and per JSON issue
pub fn report_annotations(report: &EnvironmentReport) -> Vec<String> {
    let title = format!("{} branding", report.environment);
    let json_file = report.environment.json_file_name();

    let missing = report.missing_files.iter().map(|path| {
        github_actions_annotation(
            AnnotationLevel::Error,
            &format!("Missing required file: {}", path),
            None,
            Some(&title),
        )
    });
    let issues = report.issues.iter().map(|issue| {
        github_actions_annotation(AnnotationLevel::Error, issue, Some(&json_file), Some(&title))
    });

    missing.chain(issues).collect()
}

fn escape_workflow_command_value(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
        .replace(':', "%3A")
        .replace(',', "%2C")
}

fn escape_workflow_command_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
