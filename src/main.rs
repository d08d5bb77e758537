// algotty: step-by-step algorithm animation in the terminal

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::engines::maze::SearchMode;
use algotty::input;
use algotty::ui::app::{App, RunSpec};

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <algorithm> <input...>", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    eprintln!("  heap    <items>             value:priority pairs or bare integers,");
    eprintln!("                              enqueued in order then drained");
    eprintln!("  kruskal <vertices> <edges>  edges as u-v(weight) separated by ';'");
    eprintln!("  morris  <tree>              level-order values, x or null for no node");
    eprintln!("  maze    <grid> [--all]      rows of 0/1 separated by newlines; --all");
    eprintln!("                              enumerates every path instead of the first");
    eprintln!();
    eprintln!("Any input argument naming an existing file is read from that file.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} heap \"A:5,B:2,C:8\"", program_name);
    eprintln!("  {} kruskal 4 \"0-1(1);1-2(2);2-3(3);0-3(4)\"", program_name);
    eprintln!("  {} morris \"4,2,6,1,3,5,7\"", program_name);
    eprintln!("  {} maze maze.txt --all", program_name);
}

/// Treat an argument as a file path when one exists, literal text otherwise.
fn load_input(arg: &str) -> io::Result<String> {
    if Path::new(arg).is_file() {
        fs::read_to_string(arg)
    } else {
        Ok(arg.to_string())
    }
}

fn parse_run_spec(args: &[String]) -> Result<RunSpec, String> {
    let algorithm = args[0].as_str();
    match algorithm {
        "heap" => {
            let raw = args.get(1).ok_or("heap requires a value list")?;
            let text = load_input(raw).map_err(|e| e.to_string())?;
            let items = input::parse_queue_items(&text).map_err(|e| e.to_string())?;
            Ok(RunSpec::Heap(items))
        }
        "kruskal" => {
            let count = args.get(1).ok_or("kruskal requires a vertex count")?;
            let raw = args.get(2).ok_or("kruskal requires an edge list")?;
            let vertices = input::parse_vertex_count(count).map_err(|e| e.to_string())?;
            let text = load_input(raw).map_err(|e| e.to_string())?;
            let edges = input::parse_edge_list(vertices, &text).map_err(|e| e.to_string())?;
            Ok(RunSpec::Kruskal { vertices, edges })
        }
        "morris" => {
            let raw = args.get(1).ok_or("morris requires a tree")?;
            let text = load_input(raw).map_err(|e| e.to_string())?;
            let tree = input::parse_tree(&text).map_err(|e| e.to_string())?;
            Ok(RunSpec::Morris(tree))
        }
        "maze" => {
            let raw = args.get(1).ok_or("maze requires a grid")?;
            let text = load_input(raw).map_err(|e| e.to_string())?;
            let maze = input::parse_maze(&text).map_err(|e| e.to_string())?;
            let mode = if args.iter().any(|a| a == "--all") {
                SearchMode::AllPaths
            } else {
                SearchMode::FirstPath
            };
            Ok(RunSpec::Maze { maze, mode })
        }
        other => Err(format!("unknown algorithm '{}'", other)),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("algotty")
        .to_string();

    if args.len() < 2 {
        eprintln!("Error: No algorithm given");
        eprintln!();
        print_usage(&program_name);
        return ExitCode::FAILURE;
    }

    let spec = match parse_run_spec(&args[1..]) {
        Ok(spec) => spec,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(&program_name);
            return ExitCode::FAILURE;
        }
    };

    // Generate the full trace up front; playback never interleaves with
    // generation.
    eprintln!("Generating trace...");
    let app = App::new(spec);
    eprintln!(
        "{}: {} step(s)",
        app.session.algorithm_name(),
        app.session.len()
    );

    match run_tui(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_tui(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
