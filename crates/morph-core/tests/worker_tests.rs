use morph_core::{worker, ConversionReport, ConversionRequest};

#[test]
fn background_job_reports_finished() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    let output = dir.path().join("data.yaml");
    std::fs::write(&input, r#"{"a": 1, "b": [2, 3]}"#).unwrap();

    let reports = worker::spawn(ConversionRequest {
        input: input.clone(),
        output: output.clone(),
        input_format: None,
        output_format: None,
    });

    match reports.recv().unwrap() {
        ConversionReport::Finished {
            input: reported_in,
            output: reported_out,
        } => {
            assert_eq!(reported_in, input);
            assert_eq!(reported_out, output);
        }
        ConversionReport::Failed { message } => panic!("job failed: {message}"),
    }
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "a: 1\nb:\n- 2\n- 3\n");
}

#[test]
fn background_job_reports_failure_as_message() {
    let dir = tempfile::tempdir().unwrap();
    let reports = worker::spawn(ConversionRequest {
        input: dir.path().join("absent.json"),
        output: dir.path().join("out.yaml"),
        input_format: None,
        output_format: None,
    });

    match reports.recv().unwrap() {
        ConversionReport::Failed { message } => {
            assert!(message.contains("I/O error"), "message was: {message}");
        }
        ConversionReport::Finished { .. } => panic!("job should have failed"),
    }
}

#[test]
fn concurrent_jobs_do_not_contend() {
    let dir = tempfile::tempdir().unwrap();
    let mut receivers = Vec::new();
    for i in 0..4 {
        let input = dir.path().join(format!("in{i}.json"));
        let output = dir.path().join(format!("out{i}.yaml"));
        std::fs::write(&input, format!(r#"{{"n": {i}}}"#)).unwrap();
        receivers.push(worker::spawn(ConversionRequest {
            input,
            output,
            input_format: None,
            output_format: None,
        }));
    }
    for rx in receivers {
        assert!(matches!(
            rx.recv().unwrap(),
            ConversionReport::Finished { .. }
        ));
    }
}
