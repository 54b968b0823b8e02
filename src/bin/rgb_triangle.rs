//! Interactive console front-end for the triangle rasterizer.
//!
//! Reads commands from stdin, mutates a single canvas, and writes BMP files
//! on request. All the actual work happens in the library; this is glue.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use rgb_triangle::{bmp, render_triangle, Canvas, Rgb8, Triangle, Vertex};

const DEFAULT_WIDTH: i32 = 256;
const DEFAULT_HEIGHT: i32 = 256;
const DEFAULT_FILENAME: &str = "result.bmp";

fn print_help() {
    println!("[Interactive RGB triangle drawing]");
    println!("Use one of the following commands:");
    println!("  help             prints this message");
    println!("  draw vertices    draws specified triangle on the bitmap");
    println!("                    the format of vertices is straightforward:");
    println!("                    x1 y1 color1 x2 y2 color2 x3 y3 color3");
    println!("  clear [color]    clears the bitmap (the default color is white)");
    println!("  save [filename]  saves the bitmap to a file");
    println!("  kill             quits the program without saving");
    println!("  quit             quits the program saving bitmap to the default location");
    println!();
    println!("Supported color formats:");
    println!("  #rrggbb          (hexadecimal, 00-ff each)");
    println!("  red green blue   (decimal, 0-255 each)");
    println!();
    println!("Examples:");
    println!("  draw 15 5 #000000 5 10 #000000 25 15 #000000");
    println!("  clear 255 0 0");
    println!("  save triangle.bmp");
    println!();
}

/// Parse three vertices from a `draw` command tail. Each vertex is
/// `x y #rrggbb` or `x y r g b`.
fn parse_vertices(rest: &str) -> Option<[Vertex; 3]> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let mut out = [Vertex::new(0, 0, Rgb8::BLACK); 3];
    let mut i = 0;
    for vertex in out.iter_mut() {
        let x: i32 = tokens.get(i)?.parse().ok()?;
        let y: i32 = tokens.get(i + 1)?.parse().ok()?;
        i += 2;
        let color: Rgb8 = if tokens.get(i)?.starts_with('#') {
            let c = tokens[i].parse().ok()?;
            i += 1;
            c
        } else {
            let joined = format!(
                "{} {} {}",
                tokens.get(i)?,
                tokens.get(i + 1)?,
                tokens.get(i + 2)?
            );
            i += 3;
            joined.parse().ok()?
        };
        *vertex = Vertex::new(x, y, color);
    }
    if i == tokens.len() {
        Some(out)
    } else {
        None
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut filename = DEFAULT_FILENAME.to_string();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    match args.len() {
        0 => {}
        1 => filename = args[0].clone(),
        3 => {
            filename = args[0].clone();
            match (args[1].parse(), args[2].parse()) {
                (Ok(w), Ok(h)) => {
                    width = w;
                    height = h;
                }
                _ => {
                    eprintln!("Bitmap width and height must be integers");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => {
            eprintln!("Usage: rgb_triangle [output_filename [bitmap_width bitmap_height]]");
            return ExitCode::FAILURE;
        }
    }

    println!("Settings:");
    println!("  default output filename: {}", filename);
    println!("  bitmap size: {}x{}", width, height);
    println!();
    print_help();

    let mut canvas = match Canvas::new(width, height) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    canvas.clear(Rgb8::WHITE);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!(">");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        match command {
            "help" => print_help(),
            "draw" => match parse_vertices(rest) {
                Some([a, b, c]) => render_triangle(&mut canvas, &Triangle::new(a, b, c)),
                None => println!("Incorrect vertex format!"),
            },
            "clear" => {
                if rest.is_empty() {
                    canvas.clear(Rgb8::WHITE);
                } else {
                    match rest.parse() {
                        Ok(color) => canvas.clear(color),
                        Err(_) => println!("Incorrect color format!"),
                    }
                }
            }
            "save" => {
                let target = if rest.is_empty() { filename.as_str() } else { rest };
                match bmp::save(&canvas, Path::new(target)) {
                    Ok(()) => println!("Bitmap saved successfully!"),
                    Err(e) => println!("Error saving bitmap! ({})", e),
                }
            }
            "kill" => break,
            "quit" => match bmp::save(&canvas, Path::new(&filename)) {
                Ok(()) => {
                    println!("Bitmap saved successfully!");
                    break;
                }
                Err(e) => println!("Error saving bitmap! ({})", e),
            },
            _ => println!("Incorrect command!"),
        }
    }

    ExitCode::SUCCESS
}
