use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process;
use tablexer::{
    lex, lex_lossy, read_source, render_ansi, render_html, render_tokens, HighlightOptions, TAB,
};
use tracing_subscriber::EnvFilter;

/// 对 tab 源文件做词法分析并输出高亮结果。
#[derive(Parser, Debug)]
#[command(name = "tablexer", version)]
struct Cli {
    /// 输入文件（通常是 *.tab）
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Tokens)]
    format: Format,

    /// 遇到无法匹配的字符时输出 Error token 并继续，而不是失败
    #[arg(long)]
    lossy: bool,

    /// HTML 输出带行号
    #[arg(long)]
    line_numbers: bool,

    /// 输出文件（默认 stdout）
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Tokens,
    Html,
    Ansi,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap 的用法错误默认退出码就是 2
    let cli = Cli::parse();

    if !TAB.matches_filename(&cli.input) {
        tracing::warn!(input = %cli.input.display(), "input does not look like a .tab file");
    }

    let src = match read_source(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let tokens = if cli.lossy {
        let (tokens, errors) = lex_lossy(&src);
        for e in &errors {
            eprintln!("warning: {e}");
        }
        tokens
    } else {
        match lex(&src) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("Lex failed: {e}");
                process::exit(1);
            }
        }
    };
    tracing::debug!(count = tokens.len(), "tokenized");

    let rendered = match cli.format {
        Format::Tokens => render_tokens(&tokens),
        Format::Html => {
            let opts = HighlightOptions {
                line_numbers: cli.line_numbers,
                ..HighlightOptions::default()
            };
            render_html(&tokens, &opts)
        }
        Format::Ansi => render_ansi(&tokens),
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered) {
                eprintln!("Failed to write output file {}: {e}", path.display());
                process::exit(2);
            }
        }
        None => print!("{rendered}"),
    }
}
