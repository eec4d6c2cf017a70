use kisoku::bpmn::BpmnModel;
use kisoku::converter::{
    build_rules, enumerate_paths, reduce, RuleSet, DEFAULT_BASE_IRI, DEFAULT_TASK_PREDICATE,
};
use kisoku::export::{
    DdlExporter, ExecutableExporter, JsonExporter, LegalRuleMlExporter, SwrlExporter,
};
use kisoku::process::IntoProcess;
use kisoku::report::ConversionReport;
use std::env;
use std::fs;

fn write_output(dir: &str, name: &str, content: &str) {
    let path = format!("{}/{}", dir, name);
    if let Err(e) = fs::write(&path, content) {
        eprintln!("Failed to write '{}': {}", path, e);
        std::process::exit(1);
    }
    println!("  -> Wrote '{}'", path);
}

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/process.bpmn> [output-dir]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let out_dir = args.get(2).map(String::as_str).unwrap_or("out");

    // Create output directory
    if let Err(e) = fs::create_dir_all(out_dir) {
        eprintln!("Failed to create output directory '{}': {}", out_dir, e);
        std::process::exit(1);
    }
    println!("Created output directory at '{}'", out_dir);

    // Load the diagram
    println!("Loading BPMN diagram from: {}", input_path);
    let xml = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read BPMN file '{}': {}", input_path, e);
            std::process::exit(1);
        }
    };

    let model = match BpmnModel::from_xml(&xml) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Failed to parse BPMN XML: {}", e);
            std::process::exit(1);
        }
    };
    println!("Parsed process '{}'", model.process_id());

    let process = match model.into_process() {
        Ok(process) => process,
        Err(e) => {
            eprintln!("Failed to convert BPMN model: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "  -> {} elements, {} flows",
        process.elements.len(),
        process.flows.len()
    );

    // Conversion phase
    println!("\nStarting Kisoku Rule Conversion...");

    let graph = match reduce(&process) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Reduction failed: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "  -> Reduced to {} nodes and {} segments",
        graph.node_count(),
        graph.segment_count()
    );

    let paths = match enumerate_paths(&graph) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Path enumeration failed: {}", e);
            std::process::exit(1);
        }
    };
    println!("  -> Enumerated {} start-to-end paths", paths.len());

    let rules = build_rules(&paths);
    let rule_set = RuleSet::new(
        rules,
        DEFAULT_BASE_IRI.to_string(),
        DEFAULT_TASK_PREDICATE.to_string(),
    );

    println!("Conversion Successful! {} rules generated.", rule_set.len());
    for rule in &rule_set.rules {
        println!(
            "  -> {} ({} conditions, {} obligations)",
            rule.rid,
            rule.conditions.len(),
            rule.actions.len()
        );
    }

    // Export phase
    println!("\nWriting Output Documents");
    write_output(
        out_dir,
        "listing.txt",
        &ConversionReport::render(&graph, &paths, &rule_set),
    );
    write_output(out_dir, "rules.ddl", &DdlExporter::export(&rule_set));
    write_output(out_dir, "rules.owl", &SwrlExporter::export(&rule_set));
    write_output(
        out_dir,
        "rules_executable.owl",
        &ExecutableExporter::to_owl(&rule_set),
    );
    write_output(
        out_dir,
        "rules.jena",
        &ExecutableExporter::to_jena(&rule_set),
    );
    write_output(
        out_dir,
        "rules.pl",
        &ExecutableExporter::to_prolog(&rule_set),
    );
    write_output(
        out_dir,
        "rules.lrml.xml",
        &LegalRuleMlExporter::export(&rule_set),
    );

    let json = match JsonExporter::export(&rule_set) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    };
    write_output(out_dir, "rules.json", &json);

    let artifact_path = format!("{}/rules.bin", out_dir);
    if let Err(e) = rule_set.save(&artifact_path) {
        eprintln!("Failed to save rule artifact: {}", e);
        std::process::exit(1);
    }
    println!("  -> Wrote '{}'", artifact_path);

    println!();
}
